//! Normalized state containers
//!
//! One `EntityCollection` per entity type: a `by_id` map plus an ordered id
//! list, with a request status, the last error, and a version counter bumped
//! on every mutation. The version drives selector memoization.
//!
//! Collections are only mutated by the reducer; nothing else holds a mutable
//! reference to them.

use pictune_common::models::{HourlyCount, MusicFile, Playlist, StatPoint, User};
use std::collections::HashMap;
use std::hash::Hash;

/// Identity for records stored in an `EntityCollection`.
pub trait Entity: Clone {
    type Id: Clone + Eq + Hash;

    fn id(&self) -> Self::Id;
}

impl Entity for MusicFile {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Playlist {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Request status of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Normalized in-memory table for one entity type.
///
/// Invariants:
/// - every id in `all_ids` has a `by_id` entry, and vice versa
/// - `all_ids` contains no duplicates; upsert replaces in place
/// - remove drops the map entry and the id occurrence together
#[derive(Debug, Clone)]
pub struct EntityCollection<T: Entity> {
    by_id: HashMap<T::Id, T>,
    all_ids: Vec<T::Id>,
    selected_id: Option<T::Id>,
    status: CollectionStatus,
    last_error: Option<String>,
    version: u64,
}

impl<T: Entity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            all_ids: Vec::new(),
            selected_id: None,
            status: CollectionStatus::Idle,
            last_error: None,
            version: 0,
        }
    }

    // --- read side ---

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entities in display order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.all_ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn ids(&self) -> &[T::Id] {
        &self.all_ids
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    pub fn selected_id(&self) -> Option<&T::Id> {
        self.selected_id.as_ref()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected_id.as_ref().and_then(|id| self.by_id.get(id))
    }

    pub fn status(&self) -> CollectionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    // --- write side (reducer only) ---

    fn bump(&mut self) {
        self.version += 1;
    }

    /// Mark a request in flight: status Loading, error cleared.
    pub(crate) fn begin_request(&mut self) {
        self.status = CollectionStatus::Loading;
        self.last_error = None;
        self.bump();
    }

    /// Terminal failure: record the message, keep the entities.
    ///
    /// A failed load must not wipe previously loaded data, so only the
    /// status and error fields change here.
    pub(crate) fn fail(&mut self, error: String) {
        self.status = CollectionStatus::Error;
        self.last_error = Some(error);
        self.bump();
    }

    /// Terminal success for an operation that changed no entity data.
    pub(crate) fn finish(&mut self) {
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.bump();
    }

    /// Replace the whole collection with the server's list, preserving
    /// payload order. Duplicate ids in the payload collapse onto the first
    /// occurrence (last value wins).
    pub(crate) fn set_all(&mut self, entities: Vec<T>) {
        self.by_id.clear();
        self.all_ids.clear();
        for entity in entities {
            let id = entity.id();
            if self.by_id.insert(id.clone(), entity).is_none() {
                self.all_ids.push(id);
            }
        }
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.bump();
    }

    /// Insert or replace by id. An existing entity keeps its position in
    /// `all_ids`; a new one is appended.
    pub(crate) fn upsert(&mut self, entity: T) {
        let id = entity.id();
        if self.by_id.insert(id.clone(), entity).is_none() {
            self.all_ids.push(id);
        }
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.bump();
    }

    /// Remove the `by_id` entry and the `all_ids` occurrence together.
    pub(crate) fn remove(&mut self, id: &T::Id) {
        if self.by_id.remove(id).is_some() {
            self.all_ids.retain(|existing| existing != id);
        }
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.bump();
    }

    pub(crate) fn select(&mut self, id: Option<T::Id>) {
        self.selected_id = id;
        self.bump();
    }

    /// Apply an in-place edit to one entity. Returns false when the id is
    /// unknown (nothing changes, version untouched).
    pub(crate) fn mutate<F: FnOnce(&mut T)>(&mut self, id: &T::Id, f: F) -> bool {
        match self.by_id.get_mut(id) {
            Some(entity) => {
                f(entity);
                self.bump();
                true
            }
            None => false,
        }
    }
}

/// A keyed map with its own version counter, for derived per-id data that
/// lives outside any entity collection (playable URLs).
#[derive(Debug, Clone)]
pub struct VersionedMap<K: Eq + Hash, V> {
    map: HashMap<K, V>,
    version: u64,
}

impl<K: Eq + Hash, V> Default for VersionedMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            version: 0,
        }
    }
}

impl<K: Eq + Hash, V> VersionedMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
        self.version += 1;
    }
}

/// Report statistics: replaced wholesale on load, no per-entity identity.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    pub users: Vec<StatPoint>,
    pub music: Vec<StatPoint>,
    pub uploads_by_hour: Vec<HourlyCount>,
    pub status: CollectionStatus,
    pub last_error: Option<String>,
    version: u64,
}

impl ReportState {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn begin_request(&mut self) {
        self.status = CollectionStatus::Loading;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn fail(&mut self, error: String) {
        self.status = CollectionStatus::Error;
        self.last_error = Some(error);
        self.version += 1;
    }

    pub(crate) fn set_summary(&mut self, users: Vec<StatPoint>, music: Vec<StatPoint>) {
        self.users = users;
        self.music = music;
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn set_uploads(&mut self, data: Vec<HourlyCount>) {
        self.uploads_by_hour = data;
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.version += 1;
    }
}

/// Session state. The raw token also lives in the client's `AuthToken`
/// handle; this copy is what selectors read.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub profile: Option<User>,
    pub status: CollectionStatus,
    pub last_error: Option<String>,
    version: u64,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn begin_request(&mut self) {
        self.status = CollectionStatus::Loading;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn fail(&mut self, error: String) {
        self.status = CollectionStatus::Error;
        self.last_error = Some(error);
        self.version += 1;
    }

    /// Terminal success that carries no session data (signup)
    pub(crate) fn finish_request(&mut self) {
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn set_profile(&mut self, user: User) {
        self.profile = Some(user);
        self.status = CollectionStatus::Loaded;
        self.last_error = None;
        self.version += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
        self.profile = None;
        self.status = CollectionStatus::Idle;
        self.last_error = None;
        self.version += 1;
    }
}

/// The whole application state: one collection per entity type.
///
/// Created empty at store construction and mutated only through the
/// dispatch -> reducer path for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub files: EntityCollection<MusicFile>,
    pub file_urls: VersionedMap<u64, String>,
    pub playlists: EntityCollection<Playlist>,
    pub users: EntityCollection<User>,
    pub reports: ReportState,
    pub auth: AuthState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
