//! Pure state transitions
//!
//! `reduce` is the single writer for `AppState`. Every match is exhaustive;
//! failure transitions record the error and leave previously loaded entities
//! in place.

use crate::action::{
    Action, AuthAction, MusicFileAction, PlaylistAction, ReportAction, UserAction,
};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::MusicFiles(action) => reduce_music_files(state, action),
        Action::Playlists(action) => reduce_playlists(state, action),
        Action::Users(action) => reduce_users(state, action),
        Action::Reports(action) => reduce_reports(state, action),
        Action::Auth(action) => reduce_auth(state, action),
    }
}

fn reduce_music_files(state: &mut AppState, action: MusicFileAction) {
    use MusicFileAction::*;

    match action {
        LoadAllStarted | LoadOneStarted | UpdateStarted | DeleteStarted | FetchUrlStarted
        | TranscribeStarted => state.files.begin_request(),

        LoadAllSuccess { files } => state.files.set_all(files),
        LoadOneSuccess { file } => {
            let id = file.id;
            state.files.upsert(file);
            state.files.select(Some(id));
        }
        UpdateSuccess { file } => state.files.upsert(file),
        DeleteSuccess { id } => state.files.remove(&id),

        ToggleLikeStarted { id } => {
            state.files.begin_request();
            state.files.mutate(&id, |file| file.is_liked = !file.is_liked);
        }
        ToggleLikeSuccess { id: _ } => state.files.finish(),
        ToggleLikeFailure { id, prior, error } => {
            // Restore the pre-toggle value before surfacing the error
            state.files.mutate(&id, |file| file.is_liked = prior);
            state.files.fail(error);
        }

        FetchUrlSuccess { id, url } => {
            state.file_urls.insert(id, url);
            state.files.finish();
        }
        TranscribeSuccess { id, transcript } => {
            state.files.mutate(&id, |file| file.transcript = Some(transcript));
            state.files.finish();
        }

        LoadAllFailure { error }
        | LoadOneFailure { error }
        | UpdateFailure { error }
        | DeleteFailure { error }
        | FetchUrlFailure { error }
        | TranscribeFailure { error } => state.files.fail(error),
    }
}

fn reduce_playlists(state: &mut AppState, action: PlaylistAction) {
    use PlaylistAction::*;

    match action {
        LoadAllStarted | LoadOneStarted | CreateStarted | UpdateStarted | DeleteStarted
        | AddSongStarted | RemoveSongStarted => state.playlists.begin_request(),

        LoadAllSuccess { playlists } => state.playlists.set_all(playlists),
        LoadOneSuccess { playlist } => {
            let id = playlist.id;
            state.playlists.upsert(playlist);
            state.playlists.select(Some(id));
        }
        CreateSuccess { playlist } | UpdateSuccess { playlist } => {
            state.playlists.upsert(playlist)
        }
        DeleteSuccess { id } => state.playlists.remove(&id),

        AddSongSuccess { playlist_id, song_id } => {
            state.playlists.mutate(&playlist_id, |playlist| {
                if !playlist.song_ids.contains(&song_id) {
                    playlist.song_ids.push(song_id);
                }
            });
            state.playlists.finish();
        }
        RemoveSongSuccess { playlist_id, song_id } => {
            state.playlists.mutate(&playlist_id, |playlist| {
                playlist.song_ids.retain(|id| *id != song_id);
            });
            state.playlists.finish();
        }

        LoadAllFailure { error }
        | LoadOneFailure { error }
        | CreateFailure { error }
        | UpdateFailure { error }
        | DeleteFailure { error }
        | AddSongFailure { error }
        | RemoveSongFailure { error } => state.playlists.fail(error),
    }
}

fn reduce_users(state: &mut AppState, action: UserAction) {
    use UserAction::*;

    match action {
        LoadAllStarted | CreateStarted | UpdateStarted | DeleteStarted => {
            state.users.begin_request()
        }

        LoadAllSuccess { users } => state.users.set_all(users),
        CreateSuccess { user } | UpdateSuccess { user } => state.users.upsert(user),
        DeleteSuccess { id } => state.users.remove(&id),

        LoadAllFailure { error }
        | CreateFailure { error }
        | UpdateFailure { error }
        | DeleteFailure { error } => state.users.fail(error),
    }
}

fn reduce_reports(state: &mut AppState, action: ReportAction) {
    use ReportAction::*;

    match action {
        SummaryStarted | UploadsStarted => state.reports.begin_request(),
        SummarySuccess { summary } => state.reports.set_summary(summary.users, summary.music),
        UploadsSuccess { data } => state.reports.set_uploads(data),
        SummaryFailure { error } | UploadsFailure { error } => state.reports.fail(error),
    }
}

fn reduce_auth(state: &mut AppState, action: AuthAction) {
    use AuthAction::*;

    match action {
        SignInStarted | SignUpStarted | ProfileStarted => state.auth.begin_request(),
        SignInSuccess { token } => state.auth.set_token(token),
        SignUpSuccess { user } => {
            // A fresh signup is also a user record the admin views care about
            state.users.upsert(user);
            state.auth.finish_request();
        }
        ProfileSuccess { user } => state.auth.set_profile(user),
        SignInFailure { error } | SignUpFailure { error } | ProfileFailure { error } => {
            state.auth.fail(error)
        }
        SignedOut => state.auth.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CollectionStatus;
    use chrono::Utc;
    use pictune_common::models::{MusicFile, Playlist};

    fn file(id: u64, liked: bool) -> MusicFile {
        MusicFile {
            id,
            file_name: format!("{}.mp3", id),
            display_name: format!("track {}", id),
            size: 512,
            uploaded_at: Utc::now(),
            s3_key: format!("files/{}.mp3", id),
            user_id: "u1".to_string(),
            is_liked: liked,
            transcript: None,
        }
    }

    fn playlist(id: u64, song_ids: Vec<u64>) -> Playlist {
        Playlist {
            id,
            name: format!("playlist {}", id),
            description: String::new(),
            user_id: "u1".to_string(),
            created_at: Utc::now(),
            song_ids,
        }
    }

    #[test]
    fn test_started_sets_loading_and_clears_error() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllFailure {
                error: "offline".to_string(),
            }),
        );
        assert_eq!(state.files.status(), CollectionStatus::Error);

        reduce(&mut state, Action::MusicFiles(MusicFileAction::LoadAllStarted));
        assert_eq!(state.files.status(), CollectionStatus::Loading);
        assert!(state.files.last_error().is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_entities() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllSuccess {
                files: vec![file(1, false), file(2, true)],
            }),
        );

        reduce(&mut state, Action::MusicFiles(MusicFileAction::LoadAllStarted));
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllFailure {
                error: "server unreachable".to_string(),
            }),
        );

        assert_eq!(state.files.status(), CollectionStatus::Error);
        assert_eq!(state.files.last_error(), Some("server unreachable"));
        assert_eq!(state.files.len(), 2);
    }

    #[test]
    fn test_toggle_like_failure_reverts_to_prior() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllSuccess {
                files: vec![file(1, false)],
            }),
        );

        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::ToggleLikeStarted { id: 1 }),
        );
        assert!(state.files.get(&1).unwrap().is_liked, "optimistic flip");

        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::ToggleLikeFailure {
                id: 1,
                prior: false,
                error: "like failed".to_string(),
            }),
        );
        assert!(!state.files.get(&1).unwrap().is_liked, "reverted");
        assert_eq!(state.files.last_error(), Some("like failed"));
    }

    #[test]
    fn test_delete_success_removes_entity() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllSuccess {
                files: vec![file(1, false), file(2, false)],
            }),
        );
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::DeleteSuccess { id: 1 }),
        );

        assert!(state.files.get(&1).is_none());
        assert!(!state.files.iter().any(|f| f.id == 1));
    }

    #[test]
    fn test_add_and_remove_song_membership() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::Playlists(PlaylistAction::LoadAllSuccess {
                playlists: vec![playlist(10, vec![1])],
            }),
        );

        reduce(
            &mut state,
            Action::Playlists(PlaylistAction::AddSongSuccess {
                playlist_id: 10,
                song_id: 5,
            }),
        );
        assert_eq!(state.playlists.get(&10).unwrap().song_ids, vec![1, 5]);

        // Adding the same song again does not duplicate it
        reduce(
            &mut state,
            Action::Playlists(PlaylistAction::AddSongSuccess {
                playlist_id: 10,
                song_id: 5,
            }),
        );
        assert_eq!(state.playlists.get(&10).unwrap().song_ids, vec![1, 5]);

        reduce(
            &mut state,
            Action::Playlists(PlaylistAction::RemoveSongSuccess {
                playlist_id: 10,
                song_id: 5,
            }),
        );
        assert_eq!(state.playlists.get(&10).unwrap().song_ids, vec![1]);
    }

    #[test]
    fn test_transcript_and_url_success() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::LoadAllSuccess {
                files: vec![file(3, false)],
            }),
        );

        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::FetchUrlSuccess {
                id: 3,
                url: "https://cdn.example.com/3".to_string(),
            }),
        );
        reduce(
            &mut state,
            Action::MusicFiles(MusicFileAction::TranscribeSuccess {
                id: 3,
                transcript: "la la la".to_string(),
            }),
        );

        assert_eq!(
            state.file_urls.get(&3).map(String::as_str),
            Some("https://cdn.example.com/3")
        );
        assert_eq!(
            state.files.get(&3).unwrap().transcript.as_deref(),
            Some("la la la")
        );
    }

    #[test]
    fn test_sign_out_clears_session() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::Auth(AuthAction::SignInSuccess {
                token: "jwt".to_string(),
            }),
        );
        assert!(state.auth.is_signed_in());

        reduce(&mut state, Action::Auth(AuthAction::SignedOut));
        assert!(!state.auth.is_signed_in());
        assert!(state.auth.profile.is_none());
    }
}
