//! Backend API contract
//!
//! One trait method per endpoint. The store is generic over `MusicApi`, so
//! tests substitute a scripted mock for the reqwest implementation.

use crate::error::ApiError;
use async_trait::async_trait;
use pictune_common::models::{
    HourlyCount, MusicFile, MusicFilePatch, Playlist, PlaylistDraft, PlaylistPatch, ReportRange,
    ReportSummary, User, UserDraft, UserPatch,
};
use serde::{Deserialize, Serialize};

/// POST /auth/signin response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// POST /clips body: cut a clip out of a stored music file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRequest {
    pub file_id: u64,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

/// A server-side clip export job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipJob {
    pub id: String,
    pub file_id: u64,
}

/// Clip job status as reported by GET /clips/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ClipJobStatus {
    Pending,
    Processing,
    Completed { url: String },
    Failed { message: String },
}

impl ClipJobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClipJobStatus::Completed { .. } | ClipJobStatus::Failed { .. })
    }
}

/// The backend contract, one method per endpoint.
#[async_trait]
pub trait MusicApi: Send + Sync {
    // Music files
    async fn list_music_files(
        &self,
        owner: Option<bool>,
        favorites: Option<bool>,
    ) -> Result<Vec<MusicFile>, ApiError>;
    async fn get_music_file(&self, id: u64) -> Result<MusicFile, ApiError>;
    async fn update_music_file(
        &self,
        id: u64,
        patch: &MusicFilePatch,
    ) -> Result<MusicFile, ApiError>;
    async fn delete_music_file(&self, id: u64) -> Result<(), ApiError>;
    async fn toggle_like(&self, id: u64) -> Result<(), ApiError>;
    /// Returns a short-lived playable URL for the file
    async fn get_play_url(&self, id: u64) -> Result<String, ApiError>;
    /// Kicks off transcription and returns the transcript text
    async fn transcribe(&self, id: u64) -> Result<String, ApiError>;

    // Playlists
    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError>;
    async fn get_playlist(&self, id: u64) -> Result<Playlist, ApiError>;
    async fn create_playlist(&self, draft: &PlaylistDraft) -> Result<Playlist, ApiError>;
    async fn update_playlist(&self, id: u64, patch: &PlaylistPatch)
        -> Result<Playlist, ApiError>;
    async fn delete_playlist(&self, id: u64) -> Result<(), ApiError>;
    async fn add_song_to_playlist(&self, playlist_id: u64, song_id: u64)
        -> Result<(), ApiError>;
    async fn remove_song_from_playlist(
        &self,
        playlist_id: u64,
        song_id: u64,
    ) -> Result<(), ApiError>;

    // Users
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ApiError>;
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;

    // Auth
    async fn sign_in(&self, user_name: &str, password: &str)
        -> Result<LoginResponse, ApiError>;
    async fn sign_up(&self, draft: &UserDraft) -> Result<User, ApiError>;
    async fn profile(&self) -> Result<User, ApiError>;

    // Reports
    async fn report_summary(&self, range: ReportRange) -> Result<ReportSummary, ApiError>;
    async fn uploads_by_hour(&self) -> Result<Vec<HourlyCount>, ApiError>;

    // Clip export jobs
    async fn create_clip_job(&self, request: &ClipRequest) -> Result<ClipJob, ApiError>;
    async fn clip_job_status(&self, job_id: &str) -> Result<ClipJobStatus, ApiError>;
}

// Delegation so a shared handle works anywhere an owned client does.
#[async_trait]
impl<C: MusicApi> MusicApi for std::sync::Arc<C> {
    async fn list_music_files(
        &self,
        owner: Option<bool>,
        favorites: Option<bool>,
    ) -> Result<Vec<MusicFile>, ApiError> {
        (**self).list_music_files(owner, favorites).await
    }

    async fn get_music_file(&self, id: u64) -> Result<MusicFile, ApiError> {
        (**self).get_music_file(id).await
    }

    async fn update_music_file(
        &self,
        id: u64,
        patch: &MusicFilePatch,
    ) -> Result<MusicFile, ApiError> {
        (**self).update_music_file(id, patch).await
    }

    async fn delete_music_file(&self, id: u64) -> Result<(), ApiError> {
        (**self).delete_music_file(id).await
    }

    async fn toggle_like(&self, id: u64) -> Result<(), ApiError> {
        (**self).toggle_like(id).await
    }

    async fn get_play_url(&self, id: u64) -> Result<String, ApiError> {
        (**self).get_play_url(id).await
    }

    async fn transcribe(&self, id: u64) -> Result<String, ApiError> {
        (**self).transcribe(id).await
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        (**self).list_playlists().await
    }

    async fn get_playlist(&self, id: u64) -> Result<Playlist, ApiError> {
        (**self).get_playlist(id).await
    }

    async fn create_playlist(&self, draft: &PlaylistDraft) -> Result<Playlist, ApiError> {
        (**self).create_playlist(draft).await
    }

    async fn update_playlist(
        &self,
        id: u64,
        patch: &PlaylistPatch,
    ) -> Result<Playlist, ApiError> {
        (**self).update_playlist(id, patch).await
    }

    async fn delete_playlist(&self, id: u64) -> Result<(), ApiError> {
        (**self).delete_playlist(id).await
    }

    async fn add_song_to_playlist(&self, playlist_id: u64, song_id: u64) -> Result<(), ApiError> {
        (**self).add_song_to_playlist(playlist_id, song_id).await
    }

    async fn remove_song_from_playlist(
        &self,
        playlist_id: u64,
        song_id: u64,
    ) -> Result<(), ApiError> {
        (**self).remove_song_from_playlist(playlist_id, song_id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        (**self).list_users().await
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ApiError> {
        (**self).update_user(id, patch).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete_user(id).await
    }

    async fn sign_in(&self, user_name: &str, password: &str) -> Result<LoginResponse, ApiError> {
        (**self).sign_in(user_name, password).await
    }

    async fn sign_up(&self, draft: &UserDraft) -> Result<User, ApiError> {
        (**self).sign_up(draft).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        (**self).profile().await
    }

    async fn report_summary(&self, range: ReportRange) -> Result<ReportSummary, ApiError> {
        (**self).report_summary(range).await
    }

    async fn uploads_by_hour(&self) -> Result<Vec<HourlyCount>, ApiError> {
        (**self).uploads_by_hour().await
    }

    async fn create_clip_job(&self, request: &ClipRequest) -> Result<ClipJob, ApiError> {
        (**self).create_clip_job(request).await
    }

    async fn clip_job_status(&self, job_id: &str) -> Result<ClipJobStatus, ApiError> {
        (**self).clip_job_status(job_id).await
    }
}
