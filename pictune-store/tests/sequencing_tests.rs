//! Racing-response tests: last-dispatched-wins regardless of arrival order.
//!
//! Runs on the current-thread runtime so task interleaving is controlled by
//! explicit yields; gated mock responses decide arrival order.

mod helpers;

use helpers::*;
use pictune_store::{CollectionStatus, Intent};

/// Let spawned dispatches run up to their response gates.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_double_load_keeps_latest_dispatch() {
    init_tracing();
    let (store, api) = test_store();

    let gate_first = api
        .list_playlists
        .push_gated(Ok(vec![playlist(1, "from first call", vec![])]));
    let gate_second = api
        .list_playlists
        .push_gated(Ok(vec![playlist(2, "from second call", vec![])]));

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(Intent::LoadPlaylists).await }
    });
    settle().await;
    let second = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(Intent::LoadPlaylists).await }
    });
    settle().await;

    // Second response arrives first and is applied
    gate_second.send(()).unwrap();
    settle().await;
    // First response arrives late and must be discarded as stale
    gate_first.send(()).unwrap();
    settle().await;

    first.await.unwrap();
    second.await.unwrap();

    store.read(|state| {
        assert_eq!(state.playlists.ids(), &[2]);
        assert_eq!(state.playlists.get(&2).unwrap().name, "from second call");
        assert_eq!(state.playlists.status(), CollectionStatus::Loaded);
    });
}

#[tokio::test]
async fn test_add_then_remove_song_add_resolves_first() {
    let (store, api) = test_store();
    api.list_playlists.push(Ok(vec![playlist(1, "p1", vec![])]));
    store.dispatch(Intent::LoadPlaylists).await;

    let gate_add = api.add_song.push_gated(Ok(()));
    let gate_remove = api.remove_song.push_gated(Ok(()));

    let add = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::AddSongToPlaylist { playlist_id: 1, song_id: 5 })
                .await
        }
    });
    settle().await;
    let remove = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::RemoveSongFromPlaylist { playlist_id: 1, song_id: 5 })
                .await
        }
    });
    settle().await;

    gate_add.send(()).unwrap();
    settle().await;
    gate_remove.send(()).unwrap();
    settle().await;

    add.await.unwrap();
    remove.await.unwrap();

    store.read(|state| {
        assert!(!state.playlists.get(&1).unwrap().song_ids.contains(&5));
    });
}

#[tokio::test]
async fn test_add_then_remove_song_remove_resolves_first() {
    let (store, api) = test_store();
    api.list_playlists.push(Ok(vec![playlist(1, "p1", vec![])]));
    store.dispatch(Intent::LoadPlaylists).await;

    let gate_add = api.add_song.push_gated(Ok(()));
    let gate_remove = api.remove_song.push_gated(Ok(()));

    let add = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::AddSongToPlaylist { playlist_id: 1, song_id: 5 })
                .await
        }
    });
    settle().await;
    let remove = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::RemoveSongFromPlaylist { playlist_id: 1, song_id: 5 })
                .await
        }
    });
    settle().await;

    // Remove settles first; the add response that follows is stale and
    // must not resurrect the song
    gate_remove.send(()).unwrap();
    settle().await;
    gate_add.send(()).unwrap();
    settle().await;

    add.await.unwrap();
    remove.await.unwrap();

    store.read(|state| {
        assert!(!state.playlists.get(&1).unwrap().song_ids.contains(&5));
    });
}

#[tokio::test]
async fn test_stale_update_cannot_resurrect_deleted_file() {
    let (store, api) = test_store();
    api.list_files.push(Ok(vec![music_file(1, "a")]));
    store
        .dispatch(Intent::LoadMusicFiles { owner: None, favorites: None })
        .await;

    let mut renamed = music_file(1, "a");
    renamed.display_name = "renamed".to_string();
    let gate_update = api.update_file.push_gated(Ok(renamed));
    let gate_delete = api.delete_file.push_gated(Ok(()));

    let update = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::UpdateMusicFile {
                    id: 1,
                    patch: pictune_common::models::MusicFilePatch {
                        display_name: "renamed".to_string(),
                    },
                })
                .await
        }
    });
    settle().await;
    let delete = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(Intent::DeleteMusicFile { id: 1 }).await }
    });
    settle().await;

    // Delete (dispatched later) settles first
    gate_delete.send(()).unwrap();
    settle().await;
    gate_update.send(()).unwrap();
    settle().await;

    update.await.unwrap();
    delete.await.unwrap();

    store.read(|state| {
        assert!(state.files.get(&1).is_none());
        assert!(state.files.is_empty());
    });
}

#[tokio::test]
async fn test_stale_failure_is_discarded_silently() {
    let (store, api) = test_store();
    let mut events = store.subscribe();

    let gate_failure = api
        .list_files
        .push_gated(Err(server_error(500, "first call blew up")));
    let gate_success = api.list_files.push_gated(Ok(vec![music_file(1, "a")]));

    let first = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::LoadMusicFiles { owner: None, favorites: None })
                .await
        }
    });
    settle().await;
    let second = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .dispatch(Intent::LoadMusicFiles { owner: None, favorites: None })
                .await
        }
    });
    settle().await;

    gate_success.send(()).unwrap();
    settle().await;
    gate_failure.send(()).unwrap();
    settle().await;

    first.await.unwrap();
    second.await.unwrap();

    store.read(|state| {
        // The stale failure neither wiped the data nor flipped the status
        assert_eq!(state.files.status(), CollectionStatus::Loaded);
        assert_eq!(state.files.len(), 1);
        assert!(state.files.last_error().is_none());
    });
    // And no error toast was emitted for it
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_unrelated_collections_do_not_block_each_other() {
    let (store, api) = test_store();

    // Playlist load is stuck; a file load dispatched later still completes
    let _stuck = api.list_playlists.push_gated(Ok(vec![]));
    api.list_files.push(Ok(vec![music_file(1, "a")]));

    let playlists = tokio::spawn({
        let store = store.clone();
        async move { store.dispatch(Intent::LoadPlaylists).await }
    });
    settle().await;

    store
        .dispatch(Intent::LoadMusicFiles { owner: None, favorites: None })
        .await;

    store.read(|state| {
        assert_eq!(state.files.status(), CollectionStatus::Loaded);
        assert_eq!(state.playlists.status(), CollectionStatus::Loading);
    });

    playlists.abort();
    let _ = playlists.await;
}
