//! # PicTune Common Library
//!
//! Shared code for the PicTune client crates including:
//! - Entity models (music files, playlists, users)
//! - Report statistic types
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
