//! Test helper utilities
//!
//! `MockApi` is a fully scripted `MusicApi`: each endpoint has a queue of
//! canned results, optionally gated on a oneshot channel so tests control
//! the order in which responses arrive.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use pictune_client::{
    ApiError, AuthToken, ClipJob, ClipJobStatus, ClipRequest, LoginResponse, MusicApi,
};
use pictune_common::models::{
    HourlyCount, MusicFile, MusicFilePatch, Playlist, PlaylistDraft, PlaylistPatch, ReportRange,
    ReportSummary, User, UserDraft, UserPatch,
};
use pictune_common::Config;
use pictune_store::Store;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Opt-in tracing output for debugging a failing test with --nocapture.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("pictune_store=debug")
        .with_test_writer()
        .try_init();
}

struct ScriptedCall<T> {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<T, ApiError>,
}

/// Queue of scripted results for one endpoint.
pub struct Script<T> {
    calls: Mutex<VecDeque<ScriptedCall<T>>>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(VecDeque::new()),
        }
    }
}

impl<T> Script<T> {
    /// Script a result that resolves as soon as it is requested.
    pub fn push(&self, result: Result<T, ApiError>) {
        self.calls
            .lock()
            .unwrap()
            .push_back(ScriptedCall { gate: None, result });
    }

    /// Script a result that resolves only after the returned sender fires
    /// (or is dropped).
    pub fn push_gated(&self, result: Result<T, ApiError>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().unwrap().push_back(ScriptedCall {
            gate: Some(rx),
            result,
        });
        tx
    }

    async fn next(&self, endpoint: &str) -> Result<T, ApiError> {
        let call = self
            .calls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted call to {}", endpoint));
        if let Some(gate) = call.gate {
            // A dropped sender also opens the gate
            let _ = gate.await;
        }
        call.result
    }
}

/// Scripted backend: every endpoint must be primed before it is called.
#[derive(Default)]
pub struct MockApi {
    pub list_files: Script<Vec<MusicFile>>,
    pub get_file: Script<MusicFile>,
    pub update_file: Script<MusicFile>,
    pub delete_file: Script<()>,
    pub toggle_like: Script<()>,
    pub play_url: Script<String>,
    pub transcribe: Script<String>,
    pub list_playlists: Script<Vec<Playlist>>,
    pub get_playlist: Script<Playlist>,
    pub create_playlist: Script<Playlist>,
    pub update_playlist: Script<Playlist>,
    pub delete_playlist: Script<()>,
    pub add_song: Script<()>,
    pub remove_song: Script<()>,
    pub list_users: Script<Vec<User>>,
    pub update_user: Script<User>,
    pub delete_user: Script<()>,
    pub sign_in: Script<LoginResponse>,
    pub sign_up: Script<User>,
    pub profile: Script<User>,
    pub report_summary: Script<ReportSummary>,
    pub uploads_by_hour: Script<Vec<HourlyCount>>,
    pub create_clip: Script<ClipJob>,
    pub clip_status: Script<ClipJobStatus>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MusicApi for MockApi {
    async fn list_music_files(
        &self,
        _owner: Option<bool>,
        _favorites: Option<bool>,
    ) -> Result<Vec<MusicFile>, ApiError> {
        self.list_files.next("list_music_files").await
    }

    async fn get_music_file(&self, _id: u64) -> Result<MusicFile, ApiError> {
        self.get_file.next("get_music_file").await
    }

    async fn update_music_file(
        &self,
        _id: u64,
        _patch: &MusicFilePatch,
    ) -> Result<MusicFile, ApiError> {
        self.update_file.next("update_music_file").await
    }

    async fn delete_music_file(&self, _id: u64) -> Result<(), ApiError> {
        self.delete_file.next("delete_music_file").await
    }

    async fn toggle_like(&self, _id: u64) -> Result<(), ApiError> {
        self.toggle_like.next("toggle_like").await
    }

    async fn get_play_url(&self, _id: u64) -> Result<String, ApiError> {
        self.play_url.next("get_play_url").await
    }

    async fn transcribe(&self, _id: u64) -> Result<String, ApiError> {
        self.transcribe.next("transcribe").await
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.list_playlists.next("list_playlists").await
    }

    async fn get_playlist(&self, _id: u64) -> Result<Playlist, ApiError> {
        self.get_playlist.next("get_playlist").await
    }

    async fn create_playlist(&self, _draft: &PlaylistDraft) -> Result<Playlist, ApiError> {
        self.create_playlist.next("create_playlist").await
    }

    async fn update_playlist(
        &self,
        _id: u64,
        _patch: &PlaylistPatch,
    ) -> Result<Playlist, ApiError> {
        self.update_playlist.next("update_playlist").await
    }

    async fn delete_playlist(&self, _id: u64) -> Result<(), ApiError> {
        self.delete_playlist.next("delete_playlist").await
    }

    async fn add_song_to_playlist(&self, _playlist_id: u64, _song_id: u64) -> Result<(), ApiError> {
        self.add_song.next("add_song_to_playlist").await
    }

    async fn remove_song_from_playlist(
        &self,
        _playlist_id: u64,
        _song_id: u64,
    ) -> Result<(), ApiError> {
        self.remove_song.next("remove_song_from_playlist").await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.list_users.next("list_users").await
    }

    async fn update_user(&self, _id: &str, _patch: &UserPatch) -> Result<User, ApiError> {
        self.update_user.next("update_user").await
    }

    async fn delete_user(&self, _id: &str) -> Result<(), ApiError> {
        self.delete_user.next("delete_user").await
    }

    async fn sign_in(&self, _user_name: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.sign_in.next("sign_in").await
    }

    async fn sign_up(&self, _draft: &UserDraft) -> Result<User, ApiError> {
        self.sign_up.next("sign_up").await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.profile.next("profile").await
    }

    async fn report_summary(&self, _range: ReportRange) -> Result<ReportSummary, ApiError> {
        self.report_summary.next("report_summary").await
    }

    async fn uploads_by_hour(&self) -> Result<Vec<HourlyCount>, ApiError> {
        self.uploads_by_hour.next("uploads_by_hour").await
    }

    async fn create_clip_job(&self, _request: &ClipRequest) -> Result<ClipJob, ApiError> {
        self.create_clip.next("create_clip_job").await
    }

    async fn clip_job_status(&self, _job_id: &str) -> Result<ClipJobStatus, ApiError> {
        self.clip_status.next("clip_job_status").await
    }
}

// --- fixtures ---

pub fn music_file(id: u64, name: &str) -> MusicFile {
    MusicFile {
        id,
        file_name: format!("{}.mp3", name),
        display_name: name.to_string(),
        size: 1_000,
        uploaded_at: Utc::now(),
        s3_key: format!("files/{}.mp3", name),
        user_id: "u1".to_string(),
        is_liked: false,
        transcript: None,
    }
}

pub fn playlist(id: u64, name: &str, song_ids: Vec<u64>) -> Playlist {
    Playlist {
        id,
        name: name.to_string(),
        description: String::new(),
        user_id: "u1".to_string(),
        created_at: Utc::now(),
        song_ids,
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        user_name: name.to_string(),
        email: format!("{}@example.com", name),
        roles: vec!["Viewer".to_string()],
    }
}

pub fn server_error(status: u16, message: &str) -> ApiError {
    ApiError::Server {
        status,
        message: message.to_string(),
    }
}

/// A store over a shared mock, plus the scripting handle.
pub fn test_store() -> (Store<Arc<MockApi>>, Arc<MockApi>) {
    let api = Arc::new(MockApi::new());
    let store = Store::new(Arc::clone(&api), &Config::default(), AuthToken::new());
    (store, api)
}

/// Same, but exposing the token handle for session tests.
pub fn test_store_with_token() -> (Store<Arc<MockApi>>, Arc<MockApi>, AuthToken) {
    let api = Arc::new(MockApi::new());
    let token = AuthToken::new();
    let store = Store::new(Arc::clone(&api), &Config::default(), token.clone());
    (store, api, token)
}
