//! Music file entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored music file as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicFile {
    pub id: u64,
    pub file_name: String,
    pub display_name: String,
    /// File size in bytes
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub s3_key: String,
    pub user_id: String,
    #[serde(default)]
    pub is_liked: bool,
    /// Present once the file has been transcribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

/// Editable subset of a music file (PUT /files/{id} body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicFilePatch {
    pub display_name: String,
}
