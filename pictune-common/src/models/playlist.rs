//! Playlist entity
//!
//! Playlists reference their songs by id (`song_ids`); the joined view with
//! full `MusicFile` records is produced by the selector layer, not stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Foreign keys into the music file collection
    #[serde(default)]
    pub song_ids: Vec<u64>,
}

/// Body for POST /playlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDraft {
    pub name: String,
    pub description: String,
}

/// Body for PUT /playlists/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPatch {
    pub name: String,
    pub description: String,
}
