//! # PicTune Entity Store
//!
//! Normalized async entity store for the PicTune client: the
//! action -> effect -> reducer -> selector pipeline that keeps the music
//! file, playlist, user, and report collections consistent under concurrent,
//! interleaved, possibly-failing network operations.
//!
//! Core pieces:
//! - [`state`]: normalized collections (`by_id` + ordered ids + status)
//! - [`action`]: tagged-union intents and result actions
//! - [`reducer`]: pure, exhaustive state transitions
//! - [`store`]: the dispatch pipeline (one HTTP call per intent, per-target
//!   sequence numbers, optimistic updates with revert)
//! - [`selectors`]: memoized read views keyed on collection versions
//! - [`jobs`]: bounded, cancellable polling for clip export jobs
//!
//! The store is constructed explicitly and handed to whoever needs it; there
//! is no ambient global instance.

pub mod action;
pub mod events;
pub mod jobs;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;

pub use action::{Action, Intent};
pub use events::StoreEvent;
pub use jobs::{poll_clip_job, ClipOutcome};
pub use selectors::{PlaylistWithSongs, Selectors};
pub use state::{AppState, CollectionStatus, Entity, EntityCollection};
pub use store::Store;
