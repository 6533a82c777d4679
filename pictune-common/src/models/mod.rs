//! Entity models shared between the HTTP client and the entity store.
//!
//! Field names map to the backend's camelCase JSON via serde renames; the
//! structs themselves follow Rust naming.

mod music_file;
mod playlist;
mod report;
mod user;

pub use music_file::{MusicFile, MusicFilePatch};
pub use playlist::{Playlist, PlaylistDraft, PlaylistPatch};
pub use report::{HourlyCount, ReportRange, ReportSummary, StatPoint};
pub use user::{User, UserDraft, UserPatch};
