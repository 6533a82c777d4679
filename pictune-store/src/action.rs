//! Intents and result actions
//!
//! An [`Intent`] is a UI request that may involve network I/O; the store's
//! dispatch pipeline turns each one into exactly one backend call. An
//! [`Action`] is a state transition consumed by the reducer: the Started
//! marker applied at dispatch, then exactly one Success or Failure once the
//! call settles (stale responses excepted).
//!
//! Both are sum types so the reducer's matches are exhaustive; adding an
//! operation without handling it is a compile error.

use pictune_common::models::{
    HourlyCount, MusicFile, MusicFilePatch, Playlist, PlaylistDraft, PlaylistPatch, ReportRange,
    ReportSummary, User, UserDraft, UserPatch,
};

/// A UI-originated request, carrying whatever the operation needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    LoadMusicFiles {
        owner: Option<bool>,
        favorites: Option<bool>,
    },
    LoadMusicFile {
        id: u64,
    },
    UpdateMusicFile {
        id: u64,
        patch: MusicFilePatch,
    },
    DeleteMusicFile {
        id: u64,
    },
    /// Optimistic: flips locally before the call resolves
    ToggleLike {
        id: u64,
    },
    FetchPlayUrl {
        id: u64,
    },
    TranscribeMusicFile {
        id: u64,
    },

    LoadPlaylists,
    LoadPlaylist {
        id: u64,
    },
    CreatePlaylist {
        draft: PlaylistDraft,
    },
    UpdatePlaylist {
        id: u64,
        patch: PlaylistPatch,
    },
    DeletePlaylist {
        id: u64,
    },
    AddSongToPlaylist {
        playlist_id: u64,
        song_id: u64,
    },
    RemoveSongFromPlaylist {
        playlist_id: u64,
        song_id: u64,
    },

    LoadUsers,
    CreateUser {
        draft: UserDraft,
    },
    UpdateUser {
        id: String,
        patch: UserPatch,
    },
    DeleteUser {
        id: String,
    },

    LoadReportSummary {
        range: ReportRange,
    },
    LoadUploadsByHour,

    SignIn {
        user_name: String,
        password: String,
    },
    SignUp {
        draft: UserDraft,
    },
    LoadProfile,
    SignOut,
}

/// A state transition. Only the store's apply path feeds these to the
/// reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MusicFiles(MusicFileAction),
    Playlists(PlaylistAction),
    Users(UserAction),
    Reports(ReportAction),
    Auth(AuthAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MusicFileAction {
    LoadAllStarted,
    LoadAllSuccess { files: Vec<MusicFile> },
    LoadAllFailure { error: String },

    LoadOneStarted,
    LoadOneSuccess { file: MusicFile },
    LoadOneFailure { error: String },

    UpdateStarted,
    UpdateSuccess { file: MusicFile },
    UpdateFailure { error: String },

    DeleteStarted,
    DeleteSuccess { id: u64 },
    DeleteFailure { error: String },

    /// Flips `is_liked` locally; the matching Failure reverts it.
    ToggleLikeStarted { id: u64 },
    ToggleLikeSuccess { id: u64 },
    /// `prior` is the pre-toggle value to restore
    ToggleLikeFailure { id: u64, prior: bool, error: String },

    FetchUrlStarted,
    FetchUrlSuccess { id: u64, url: String },
    FetchUrlFailure { error: String },

    TranscribeStarted,
    TranscribeSuccess { id: u64, transcript: String },
    TranscribeFailure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistAction {
    LoadAllStarted,
    LoadAllSuccess { playlists: Vec<Playlist> },
    LoadAllFailure { error: String },

    LoadOneStarted,
    LoadOneSuccess { playlist: Playlist },
    LoadOneFailure { error: String },

    CreateStarted,
    CreateSuccess { playlist: Playlist },
    CreateFailure { error: String },

    UpdateStarted,
    UpdateSuccess { playlist: Playlist },
    UpdateFailure { error: String },

    DeleteStarted,
    DeleteSuccess { id: u64 },
    DeleteFailure { error: String },

    AddSongStarted,
    AddSongSuccess { playlist_id: u64, song_id: u64 },
    AddSongFailure { error: String },

    RemoveSongStarted,
    RemoveSongSuccess { playlist_id: u64, song_id: u64 },
    RemoveSongFailure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    LoadAllStarted,
    LoadAllSuccess { users: Vec<User> },
    LoadAllFailure { error: String },

    CreateStarted,
    CreateSuccess { user: User },
    CreateFailure { error: String },

    UpdateStarted,
    UpdateSuccess { user: User },
    UpdateFailure { error: String },

    DeleteStarted,
    DeleteSuccess { id: String },
    DeleteFailure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    SummaryStarted,
    SummarySuccess { summary: ReportSummary },
    SummaryFailure { error: String },

    UploadsStarted,
    UploadsSuccess { data: Vec<HourlyCount> },
    UploadsFailure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    SignInStarted,
    SignInSuccess { token: String },
    SignInFailure { error: String },

    SignUpStarted,
    SignUpSuccess { user: User },
    SignUpFailure { error: String },

    ProfileStarted,
    ProfileSuccess { user: User },
    ProfileFailure { error: String },

    SignedOut,
}
