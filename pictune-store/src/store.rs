//! The dispatch pipeline
//!
//! `Store` owns the application state and is its single writer. Dispatching
//! an intent applies the Started action synchronously, performs exactly one
//! backend call under the configured timeout, then applies the terminal
//! action unless a response with a higher sequence number has already been
//! applied for the same target (last-dispatched-wins, not
//! last-resolved-wins).
//!
//! Errors never escape `dispatch`: every failure becomes a Failure action
//! plus a broadcast notification.

use crate::action::{
    Action, AuthAction, MusicFileAction, PlaylistAction, ReportAction, UserAction,
};
use crate::events::StoreEvent;
use crate::jobs::{poll_clip_job, ClipOutcome};
use crate::reducer;
use crate::state::AppState;
use crate::Intent;
use pictune_client::{ApiError, AuthToken, ClipRequest, MusicApi};
use pictune_common::config::ClipPollConfig;
use pictune_common::models::{
    MusicFilePatch, PlaylistDraft, PlaylistPatch, ReportRange, UserDraft, UserPatch,
};
use pictune_common::Config;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Target of an in-flight request, for stale-response bookkeeping.
///
/// List loads use a collection-wide key; entity operations key on the id so
/// conflicting writes to the same entity serialize in dispatch order while
/// unrelated entities proceed independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TargetKey {
    FileList,
    File(u64),
    FileUrl(u64),
    PlaylistList,
    Playlist(u64),
    UserList,
    User(String),
    ReportSummary,
    UploadsByHour,
    Session,
}

struct Shared {
    state: AppState,
    /// Highest sequence number already applied per target
    applied: HashMap<TargetKey, u64>,
}

struct StoreInner<C> {
    api: C,
    token: AuthToken,
    shared: Mutex<Shared>,
    /// Monotonic dispatch sequence, shared across all targets
    seq: AtomicU64,
    events: broadcast::Sender<StoreEvent>,
    timeout: Duration,
    clip_poll: ClipPollConfig,
}

/// Handle to the entity store. Cheap to clone; all clones share one state.
pub struct Store<C: MusicApi> {
    inner: Arc<StoreInner<C>>,
}

impl<C: MusicApi> Clone for Store<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: MusicApi> Store<C> {
    /// Create an empty store over the given API collaborator.
    pub fn new(api: C, config: &Config, token: AuthToken) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            inner: Arc::new(StoreInner {
                api,
                token,
                shared: Mutex::new(Shared {
                    state: AppState::new(),
                    applied: HashMap::new(),
                }),
                seq: AtomicU64::new(0),
                events,
                timeout: config.request_timeout(),
                clip_poll: config.clip_poll.clone(),
            }),
        }
    }

    /// Subscribe to notification events (toasts)
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// Read the current state through a closure. The lock is held only for
    /// the closure's duration; never await inside it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock().state)
    }

    /// Clone of the current state, for tests and selector snapshots
    pub fn snapshot(&self) -> AppState {
        self.lock().state.clone()
    }

    /// Route an intent to its effect. Exactly one backend call per intent.
    pub async fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::LoadMusicFiles { owner, favorites } => {
                self.load_music_files(owner, favorites).await
            }
            Intent::LoadMusicFile { id } => self.load_music_file(id).await,
            Intent::UpdateMusicFile { id, patch } => self.update_music_file(id, patch).await,
            Intent::DeleteMusicFile { id } => self.delete_music_file(id).await,
            Intent::ToggleLike { id } => self.toggle_like(id).await,
            Intent::FetchPlayUrl { id } => self.fetch_play_url(id).await,
            Intent::TranscribeMusicFile { id } => self.transcribe_music_file(id).await,
            Intent::LoadPlaylists => self.load_playlists().await,
            Intent::LoadPlaylist { id } => self.load_playlist(id).await,
            Intent::CreatePlaylist { draft } => self.create_playlist(draft).await,
            Intent::UpdatePlaylist { id, patch } => self.update_playlist(id, patch).await,
            Intent::DeletePlaylist { id } => self.delete_playlist(id).await,
            Intent::AddSongToPlaylist { playlist_id, song_id } => {
                self.add_song_to_playlist(playlist_id, song_id).await
            }
            Intent::RemoveSongFromPlaylist { playlist_id, song_id } => {
                self.remove_song_from_playlist(playlist_id, song_id).await
            }
            Intent::LoadUsers => self.load_users().await,
            Intent::CreateUser { draft } => self.create_user(draft).await,
            Intent::UpdateUser { id, patch } => self.update_user(id, patch).await,
            Intent::DeleteUser { id } => self.delete_user(id).await,
            Intent::LoadReportSummary { range } => self.load_report_summary(range).await,
            Intent::LoadUploadsByHour => self.load_uploads_by_hour().await,
            Intent::SignIn { user_name, password } => self.sign_in(&user_name, &password).await,
            Intent::SignUp { draft } => self.sign_up(draft).await,
            Intent::LoadProfile => self.load_profile().await,
            Intent::SignOut => self.sign_out(),
        }
    }

    // --- music files ---

    pub async fn load_music_files(&self, owner: Option<bool>, favorites: Option<bool>) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::LoadAllStarted));
        match self.call(self.inner.api.list_music_files(owner, favorites)).await {
            Ok(files) => {
                self.finish(
                    TargetKey::FileList,
                    seq,
                    Action::MusicFiles(MusicFileAction::LoadAllSuccess { files }),
                );
            }
            Err(e) => self.reject(TargetKey::FileList, seq, &e, "Failed to load music files", |error| {
                Action::MusicFiles(MusicFileAction::LoadAllFailure { error })
            }),
        }
    }

    pub async fn load_music_file(&self, id: u64) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::LoadOneStarted));
        match self.call(self.inner.api.get_music_file(id)).await {
            Ok(file) => {
                self.finish(
                    TargetKey::File(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::LoadOneSuccess { file }),
                );
            }
            Err(e) => self.reject(TargetKey::File(id), seq, &e, "Failed to load music file", |error| {
                Action::MusicFiles(MusicFileAction::LoadOneFailure { error })
            }),
        }
    }

    pub async fn update_music_file(&self, id: u64, patch: MusicFilePatch) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::UpdateStarted));
        match self.call(self.inner.api.update_music_file(id, &patch)).await {
            Ok(file) => {
                if self.finish(
                    TargetKey::File(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::UpdateSuccess { file }),
                ) {
                    self.notify_mutation("Music file updated successfully");
                }
            }
            Err(e) => self.reject(TargetKey::File(id), seq, &e, "Failed to update music file", |error| {
                Action::MusicFiles(MusicFileAction::UpdateFailure { error })
            }),
        }
    }

    pub async fn delete_music_file(&self, id: u64) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::DeleteStarted));
        match self.call(self.inner.api.delete_music_file(id)).await {
            Ok(()) => {
                if self.finish(
                    TargetKey::File(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::DeleteSuccess { id }),
                ) {
                    self.notify_mutation("Music file deleted successfully");
                }
            }
            Err(e) => self.reject(TargetKey::File(id), seq, &e, "Failed to delete music file", |error| {
                Action::MusicFiles(MusicFileAction::DeleteFailure { error })
            }),
        }
    }

    /// Optimistic: the flag flips locally before the call resolves and is
    /// restored from the pre-toggle snapshot if the call fails.
    pub async fn toggle_like(&self, id: u64) {
        // An unknown id must not leave the collection in Loading: skip the
        // Started action (and the network call) entirely.
        let (seq, prior) = self.begin_with(|state| {
            let prior = state.files.get(&id).map(|file| file.is_liked);
            if prior.is_some() {
                reducer::reduce(
                    state,
                    Action::MusicFiles(MusicFileAction::ToggleLikeStarted { id }),
                );
            }
            prior
        });

        let Some(prior) = prior else {
            tracing::debug!(id, "toggle_like on unknown file, skipping");
            return;
        };

        match self.call(self.inner.api.toggle_like(id)).await {
            Ok(()) => {
                self.finish(
                    TargetKey::File(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::ToggleLikeSuccess { id }),
                );
            }
            Err(e) => {
                tracing::warn!(id, "toggle_like failed, reverting optimistic flip");
                self.reject(TargetKey::File(id), seq, &e, "Failed to toggle like", |error| {
                    Action::MusicFiles(MusicFileAction::ToggleLikeFailure { id, prior, error })
                });
            }
        }
    }

    pub async fn fetch_play_url(&self, id: u64) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::FetchUrlStarted));
        match self.call(self.inner.api.get_play_url(id)).await {
            Ok(url) => {
                self.finish(
                    TargetKey::FileUrl(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::FetchUrlSuccess { id, url }),
                );
            }
            Err(e) => self.reject(TargetKey::FileUrl(id), seq, &e, "Failed to get music file URL", |error| {
                Action::MusicFiles(MusicFileAction::FetchUrlFailure { error })
            }),
        }
    }

    pub async fn transcribe_music_file(&self, id: u64) {
        let seq = self.begin(Action::MusicFiles(MusicFileAction::TranscribeStarted));
        match self.call(self.inner.api.transcribe(id)).await {
            Ok(transcript) => {
                if self.finish(
                    TargetKey::File(id),
                    seq,
                    Action::MusicFiles(MusicFileAction::TranscribeSuccess { id, transcript }),
                ) {
                    self.notify_mutation("Transcription complete");
                }
            }
            Err(e) => self.reject(TargetKey::File(id), seq, &e, "Failed to transcribe music file", |error| {
                Action::MusicFiles(MusicFileAction::TranscribeFailure { error })
            }),
        }
    }

    // --- playlists ---

    pub async fn load_playlists(&self) {
        let seq = self.begin(Action::Playlists(PlaylistAction::LoadAllStarted));
        match self.call(self.inner.api.list_playlists()).await {
            Ok(playlists) => {
                self.finish(
                    TargetKey::PlaylistList,
                    seq,
                    Action::Playlists(PlaylistAction::LoadAllSuccess { playlists }),
                );
            }
            Err(e) => self.reject(TargetKey::PlaylistList, seq, &e, "Failed to load playlists", |error| {
                Action::Playlists(PlaylistAction::LoadAllFailure { error })
            }),
        }
    }

    pub async fn load_playlist(&self, id: u64) {
        let seq = self.begin(Action::Playlists(PlaylistAction::LoadOneStarted));
        match self.call(self.inner.api.get_playlist(id)).await {
            Ok(playlist) => {
                self.finish(
                    TargetKey::Playlist(id),
                    seq,
                    Action::Playlists(PlaylistAction::LoadOneSuccess { playlist }),
                );
            }
            Err(e) => self.reject(TargetKey::Playlist(id), seq, &e, "Failed to load playlist", |error| {
                Action::Playlists(PlaylistAction::LoadOneFailure { error })
            }),
        }
    }

    pub async fn create_playlist(&self, draft: PlaylistDraft) {
        let seq = self.begin(Action::Playlists(PlaylistAction::CreateStarted));
        match self.call(self.inner.api.create_playlist(&draft)).await {
            Ok(playlist) => {
                if self.finish(
                    TargetKey::PlaylistList,
                    seq,
                    Action::Playlists(PlaylistAction::CreateSuccess { playlist }),
                ) {
                    self.notify_mutation("Playlist created successfully");
                }
            }
            Err(e) => self.reject(TargetKey::PlaylistList, seq, &e, "Failed to create playlist", |error| {
                Action::Playlists(PlaylistAction::CreateFailure { error })
            }),
        }
    }

    pub async fn update_playlist(&self, id: u64, patch: PlaylistPatch) {
        let seq = self.begin(Action::Playlists(PlaylistAction::UpdateStarted));
        match self.call(self.inner.api.update_playlist(id, &patch)).await {
            Ok(playlist) => {
                if self.finish(
                    TargetKey::Playlist(id),
                    seq,
                    Action::Playlists(PlaylistAction::UpdateSuccess { playlist }),
                ) {
                    self.notify_mutation("Playlist updated successfully");
                }
            }
            Err(e) => self.reject(TargetKey::Playlist(id), seq, &e, "Failed to update playlist", |error| {
                Action::Playlists(PlaylistAction::UpdateFailure { error })
            }),
        }
    }

    pub async fn delete_playlist(&self, id: u64) {
        let seq = self.begin(Action::Playlists(PlaylistAction::DeleteStarted));
        match self.call(self.inner.api.delete_playlist(id)).await {
            Ok(()) => {
                if self.finish(
                    TargetKey::Playlist(id),
                    seq,
                    Action::Playlists(PlaylistAction::DeleteSuccess { id }),
                ) {
                    self.notify_mutation("Playlist deleted successfully");
                }
            }
            Err(e) => self.reject(TargetKey::Playlist(id), seq, &e, "Failed to delete playlist", |error| {
                Action::Playlists(PlaylistAction::DeleteFailure { error })
            }),
        }
    }

    pub async fn add_song_to_playlist(&self, playlist_id: u64, song_id: u64) {
        let seq = self.begin(Action::Playlists(PlaylistAction::AddSongStarted));
        match self.call(self.inner.api.add_song_to_playlist(playlist_id, song_id)).await {
            Ok(()) => {
                self.finish(
                    TargetKey::Playlist(playlist_id),
                    seq,
                    Action::Playlists(PlaylistAction::AddSongSuccess { playlist_id, song_id }),
                );
            }
            Err(e) => self.reject(
                TargetKey::Playlist(playlist_id),
                seq,
                &e,
                "Failed to add song to playlist",
                |error| Action::Playlists(PlaylistAction::AddSongFailure { error }),
            ),
        }
    }

    pub async fn remove_song_from_playlist(&self, playlist_id: u64, song_id: u64) {
        let seq = self.begin(Action::Playlists(PlaylistAction::RemoveSongStarted));
        match self
            .call(self.inner.api.remove_song_from_playlist(playlist_id, song_id))
            .await
        {
            Ok(()) => {
                self.finish(
                    TargetKey::Playlist(playlist_id),
                    seq,
                    Action::Playlists(PlaylistAction::RemoveSongSuccess { playlist_id, song_id }),
                );
            }
            Err(e) => self.reject(
                TargetKey::Playlist(playlist_id),
                seq,
                &e,
                "Failed to remove song from playlist",
                |error| Action::Playlists(PlaylistAction::RemoveSongFailure { error }),
            ),
        }
    }

    // --- users ---

    pub async fn load_users(&self) {
        let seq = self.begin(Action::Users(UserAction::LoadAllStarted));
        match self.call(self.inner.api.list_users()).await {
            Ok(users) => {
                self.finish(
                    TargetKey::UserList,
                    seq,
                    Action::Users(UserAction::LoadAllSuccess { users }),
                );
            }
            Err(e) => self.reject(TargetKey::UserList, seq, &e, "Failed to load users", |error| {
                Action::Users(UserAction::LoadAllFailure { error })
            }),
        }
    }

    pub async fn create_user(&self, draft: UserDraft) {
        let seq = self.begin(Action::Users(UserAction::CreateStarted));
        match self.call(self.inner.api.sign_up(&draft)).await {
            Ok(user) => {
                if self.finish(
                    TargetKey::UserList,
                    seq,
                    Action::Users(UserAction::CreateSuccess { user }),
                ) {
                    self.notify_mutation("User created successfully");
                }
            }
            Err(e) => self.reject(TargetKey::UserList, seq, &e, "Failed to create user", |error| {
                Action::Users(UserAction::CreateFailure { error })
            }),
        }
    }

    pub async fn update_user(&self, id: String, patch: UserPatch) {
        let seq = self.begin(Action::Users(UserAction::UpdateStarted));
        match self.call(self.inner.api.update_user(&id, &patch)).await {
            Ok(user) => {
                if self.finish(
                    TargetKey::User(id),
                    seq,
                    Action::Users(UserAction::UpdateSuccess { user }),
                ) {
                    self.notify_mutation("User updated successfully");
                }
            }
            Err(e) => self.reject(TargetKey::User(id), seq, &e, "Failed to update user", |error| {
                Action::Users(UserAction::UpdateFailure { error })
            }),
        }
    }

    pub async fn delete_user(&self, id: String) {
        let seq = self.begin(Action::Users(UserAction::DeleteStarted));
        match self.call(self.inner.api.delete_user(&id)).await {
            Ok(()) => {
                if self.finish(
                    TargetKey::User(id.clone()),
                    seq,
                    Action::Users(UserAction::DeleteSuccess { id }),
                ) {
                    self.notify_mutation("User deleted successfully");
                }
            }
            Err(e) => self.reject(TargetKey::User(id), seq, &e, "Failed to delete user", |error| {
                Action::Users(UserAction::DeleteFailure { error })
            }),
        }
    }

    // --- reports ---

    pub async fn load_report_summary(&self, range: ReportRange) {
        let seq = self.begin(Action::Reports(ReportAction::SummaryStarted));
        match self.call(self.inner.api.report_summary(range)).await {
            Ok(summary) => {
                self.finish(
                    TargetKey::ReportSummary,
                    seq,
                    Action::Reports(ReportAction::SummarySuccess { summary }),
                );
            }
            Err(e) => self.reject(TargetKey::ReportSummary, seq, &e, "Failed to load report", |error| {
                Action::Reports(ReportAction::SummaryFailure { error })
            }),
        }
    }

    pub async fn load_uploads_by_hour(&self) {
        let seq = self.begin(Action::Reports(ReportAction::UploadsStarted));
        match self.call(self.inner.api.uploads_by_hour()).await {
            Ok(data) => {
                self.finish(
                    TargetKey::UploadsByHour,
                    seq,
                    Action::Reports(ReportAction::UploadsSuccess { data }),
                );
            }
            Err(e) => self.reject(TargetKey::UploadsByHour, seq, &e, "Failed to load upload stats", |error| {
                Action::Reports(ReportAction::UploadsFailure { error })
            }),
        }
    }

    // --- auth ---

    /// Sign in, store the token on success, then load the profile.
    pub async fn sign_in(&self, user_name: &str, password: &str) {
        let seq = self.begin(Action::Auth(AuthAction::SignInStarted));
        match self.call(self.inner.api.sign_in(user_name, password)).await {
            Ok(response) => {
                self.inner.token.set(response.token.clone());
                let applied = self.finish(
                    TargetKey::Session,
                    seq,
                    Action::Auth(AuthAction::SignInSuccess { token: response.token }),
                );
                if applied {
                    self.load_profile().await;
                }
            }
            Err(e) => self.reject(TargetKey::Session, seq, &e, "Login failed", |error| {
                Action::Auth(AuthAction::SignInFailure { error })
            }),
        }
    }

    pub async fn sign_up(&self, draft: UserDraft) {
        let seq = self.begin(Action::Auth(AuthAction::SignUpStarted));
        match self.call(self.inner.api.sign_up(&draft)).await {
            Ok(user) => {
                if self.finish(
                    TargetKey::Session,
                    seq,
                    Action::Auth(AuthAction::SignUpSuccess { user }),
                ) {
                    self.notify_mutation("Account created successfully");
                }
            }
            Err(e) => self.reject(TargetKey::Session, seq, &e, "Signup failed", |error| {
                Action::Auth(AuthAction::SignUpFailure { error })
            }),
        }
    }

    pub async fn load_profile(&self) {
        let seq = self.begin(Action::Auth(AuthAction::ProfileStarted));
        match self.call(self.inner.api.profile()).await {
            Ok(user) => {
                self.finish(
                    TargetKey::Session,
                    seq,
                    Action::Auth(AuthAction::ProfileSuccess { user }),
                );
            }
            Err(e) => self.reject(TargetKey::Session, seq, &e, "Failed to load profile", |error| {
                Action::Auth(AuthAction::ProfileFailure { error })
            }),
        }
    }

    /// Purely local: clear the token handle and the session state.
    pub fn sign_out(&self) {
        self.inner.token.clear();
        let mut shared = self.lock();
        reducer::reduce(&mut shared.state, Action::Auth(AuthAction::SignedOut));
        tracing::info!("signed out");
    }

    // --- clip export ---

    /// Create a clip export job and poll it to completion with bounded
    /// backoff. Cancellation stops the poll; a late status response is
    /// simply dropped with it.
    pub async fn export_clip(&self, request: ClipRequest, cancel: CancellationToken) -> ClipOutcome {
        match self.call(self.inner.api.create_clip_job(&request)).await {
            Ok(job) => {
                let outcome =
                    poll_clip_job(&self.inner.api, &job.id, &self.inner.clip_poll, cancel).await;
                match &outcome {
                    ClipOutcome::Completed { .. } => self.notify_mutation("Clip exported"),
                    ClipOutcome::Failed { message } => self.notify(StoreEvent::RequestFailed {
                        message: message.clone(),
                    }),
                    ClipOutcome::TimedOut => self.notify(StoreEvent::RequestFailed {
                        message: "Clip export timed out".to_string(),
                    }),
                    ClipOutcome::Cancelled => {}
                }
                outcome
            }
            Err(e) => {
                let message = e.user_message("Failed to start clip export");
                self.notify(StoreEvent::RequestFailed {
                    message: message.clone(),
                });
                ClipOutcome::Failed { message }
            }
        }
    }

    // --- pipeline internals ---

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.inner.shared.lock().expect("store lock poisoned")
    }

    /// Allocate the dispatch sequence number and apply the Started action.
    fn begin(&self, pending: Action) -> u64 {
        let (seq, ()) = self.begin_with(|state| reducer::reduce(state, pending));
        seq
    }

    /// Like `begin`, for effects that also need to snapshot prior state
    /// under the same lock.
    fn begin_with<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> (u64, R) {
        let seq = self.inner.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let mut shared = self.lock();
        let out = f(&mut shared.state);
        (seq, out)
    }

    /// Apply a terminal action unless a newer response already settled this
    /// target. Returns whether the action was applied.
    fn finish(&self, key: TargetKey, seq: u64, action: Action) -> bool {
        let mut shared = self.lock();
        let highest = shared.applied.get(&key).copied().unwrap_or(0);
        if seq < highest {
            tracing::debug!(?key, seq, highest, "stale response discarded");
            return false;
        }
        shared.applied.insert(key, seq);
        reducer::reduce(&mut shared.state, action);
        true
    }

    /// Failure path: apply the Failure action (stale-checked) and notify.
    fn reject(
        &self,
        key: TargetKey,
        seq: u64,
        error: &ApiError,
        fallback: &str,
        make_action: impl FnOnce(String) -> Action,
    ) {
        let message = error.user_message(fallback);
        if self.finish(key, seq, make_action(message.clone())) {
            // A 401 on an authenticated session means the token went bad;
            // a 401 on sign-in is just wrong credentials
            if matches!(error, ApiError::Server { status: 401, .. }) && self.inner.token.is_set() {
                self.notify(StoreEvent::SessionExpired);
            }
            self.notify(StoreEvent::RequestFailed { message });
        }
    }

    /// Run a backend call under the configured timeout.
    async fn call<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match tokio::time::timeout(self.inner.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        }
    }

    fn notify(&self, event: StoreEvent) {
        // Ignore send errors (no subscribers is OK)
        let _ = self.inner.events.send(event);
    }

    fn notify_mutation(&self, description: &str) {
        tracing::info!("{}", description);
        self.notify(StoreEvent::MutationSucceeded {
            description: description.to_string(),
        });
    }
}
