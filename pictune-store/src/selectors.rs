//! Memoized read views
//!
//! Selectors are pure functions of the state plus optional parameters,
//! memoized on the backing collection's version counter (not on any
//! framework's reference equality). Same version + same parameters returns
//! the same `Arc`, so consumers relying on pointer identity never re-render
//! spuriously. Parametrized selectors cache per parameter and do not evict;
//! collections here are small.

use crate::state::AppState;
use pictune_common::models::{MusicFile, Playlist, User};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// One memo slot: recompute only when the version key changes.
struct MemoCell<V, T> {
    cell: Mutex<Option<(V, T)>>,
}

impl<V: PartialEq + Copy, T: Clone> MemoCell<V, T> {
    fn new() -> Self {
        Self {
            cell: Mutex::new(None),
        }
    }

    fn get(&self, version: V, compute: impl FnOnce() -> T) -> T {
        let mut cell = self.cell.lock().expect("memo lock poisoned");
        match &*cell {
            Some((cached_version, value)) if *cached_version == version => value.clone(),
            _ => {
                let value = compute();
                *cell = Some((version, value.clone()));
                value
            }
        }
    }
}

/// Per-parameter memo map. An entry for one key never evicts another's.
struct ParamMemo<K, V, T> {
    cells: Mutex<HashMap<K, (V, T)>>,
}

impl<K: Eq + Hash + Clone, V: PartialEq + Copy, T: Clone> ParamMemo<K, V, T> {
    fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, key: K, version: V, compute: impl FnOnce() -> T) -> T {
        let mut cells = self.cells.lock().expect("memo lock poisoned");
        match cells.get(&key) {
            Some((cached_version, value)) if *cached_version == version => value.clone(),
            _ => {
                let value = compute();
                cells.insert(key, (version, value.clone()));
                value
            }
        }
    }
}

/// A playlist joined with its resolved song records.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistWithSongs {
    pub playlist: Playlist,
    /// Songs in playlist order; ids missing from the file collection are
    /// skipped, never an error.
    pub songs: Vec<MusicFile>,
}

/// Derived view layer over [`AppState`].
///
/// Owns the memo caches; the state itself stays free of derived data.
pub struct Selectors {
    all_files: MemoCell<u64, Arc<Vec<MusicFile>>>,
    liked_files: MemoCell<u64, Arc<Vec<MusicFile>>>,
    file_by_id: ParamMemo<u64, u64, Option<Arc<MusicFile>>>,
    file_url: ParamMemo<u64, u64, Option<Arc<String>>>,
    all_playlists: MemoCell<u64, Arc<Vec<Playlist>>>,
    playlist_with_songs: ParamMemo<u64, (u64, u64), Option<Arc<PlaylistWithSongs>>>,
    all_users: MemoCell<u64, Arc<Vec<User>>>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

impl Selectors {
    pub fn new() -> Self {
        Self {
            all_files: MemoCell::new(),
            liked_files: MemoCell::new(),
            file_by_id: ParamMemo::new(),
            file_url: ParamMemo::new(),
            all_playlists: MemoCell::new(),
            playlist_with_songs: ParamMemo::new(),
            all_users: MemoCell::new(),
        }
    }

    /// All music files in display order.
    pub fn all_music_files(&self, state: &AppState) -> Arc<Vec<MusicFile>> {
        self.all_files.get(state.files.version(), || {
            Arc::new(state.files.iter().cloned().collect())
        })
    }

    /// Favorites view.
    pub fn liked_music_files(&self, state: &AppState) -> Arc<Vec<MusicFile>> {
        self.liked_files.get(state.files.version(), || {
            Arc::new(state.files.iter().filter(|f| f.is_liked).cloned().collect())
        })
    }

    pub fn music_file_by_id(&self, state: &AppState, id: u64) -> Option<Arc<MusicFile>> {
        self.file_by_id.get(id, state.files.version(), || {
            state.files.get(&id).cloned().map(Arc::new)
        })
    }

    /// The detail-view file, when one is selected.
    pub fn selected_music_file(&self, state: &AppState) -> Option<Arc<MusicFile>> {
        let id = *state.files.selected_id()?;
        self.music_file_by_id(state, id)
    }

    /// Playable URL for one file, cached per id.
    pub fn file_url(&self, state: &AppState, id: u64) -> Option<Arc<String>> {
        self.file_url.get(id, state.file_urls.version(), || {
            state.file_urls.get(&id).cloned().map(Arc::new)
        })
    }

    pub fn all_playlists(&self, state: &AppState) -> Arc<Vec<Playlist>> {
        self.all_playlists.get(state.playlists.version(), || {
            Arc::new(state.playlists.iter().cloned().collect())
        })
    }

    /// Cross-collection join: a playlist with its song records resolved.
    /// Keyed on both collections' versions.
    pub fn playlist_with_songs(
        &self,
        state: &AppState,
        id: u64,
    ) -> Option<Arc<PlaylistWithSongs>> {
        let version = (state.playlists.version(), state.files.version());
        self.playlist_with_songs.get(id, version, || {
            let playlist = state.playlists.get(&id)?.clone();
            let songs = playlist
                .song_ids
                .iter()
                .filter_map(|song_id| state.files.get(song_id).cloned())
                .collect();
            Some(Arc::new(PlaylistWithSongs { playlist, songs }))
        })
    }

    pub fn all_users(&self, state: &AppState) -> Arc<Vec<User>> {
        self.all_users.get(state.users.version(), || {
            Arc::new(state.users.iter().cloned().collect())
        })
    }
}
