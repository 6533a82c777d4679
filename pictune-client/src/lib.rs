//! # PicTune HTTP Client
//!
//! The store's only external boundary: the `MusicApi` trait describing the
//! backend contract, and `HttpMusicApi`, its reqwest-backed implementation.
//! The backend protocol itself is treated as opaque JSON-over-HTTP; this crate
//! normalizes transport failures, timeouts, and non-2xx responses into the
//! `ApiError` taxonomy the store consumes.

pub mod api;
pub mod auth;
pub mod error;
pub mod http;

pub use api::{ClipJob, ClipJobStatus, ClipRequest, LoginResponse, MusicApi};
pub use auth::AuthToken;
pub use error::ApiError;
pub use http::HttpMusicApi;
