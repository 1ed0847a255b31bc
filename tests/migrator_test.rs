mod common;

use common::{FakeDestination, FakeSource};
use playlift::services::{MigrateError, PlaylistMigrator};
use playlift::types::Track;

fn track(title: &str, album: &str) -> Track {
    Track {
        title: title.to_string(),
        album: album.to_string(),
    }
}

fn gym_source() -> FakeSource {
    FakeSource::new(
        "Gym Mix",
        "Songs to lift to",
        vec![
            track("Alpha", "First"),
            track("Beta", "Second"),
            track("Gamma", "Third"),
        ],
    )
}

fn matching_destination() -> FakeDestination {
    FakeDestination::with_songs(&[
        ("Alpha from First", "vid-a"),
        ("Beta from Second", "vid-b"),
        ("Gamma from Third", "vid-c"),
    ])
}

#[tokio::test]
async fn test_migrate_creates_and_populates_playlist() {
    let source = gym_source();
    let destination = matching_destination();
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await.unwrap();

    assert_eq!(result, Some("PL001".to_string()));

    let state = destination.state.lock().unwrap();
    assert_eq!(
        state.created,
        vec![("Gym Mix".to_string(), "Songs to lift to".to_string())]
    );
    assert_eq!(
        state.inserts,
        vec![(
            "PL001".to_string(),
            vec![
                "vid-a".to_string(),
                "vid-b".to_string(),
                "vid-c".to_string()
            ],
            true
        )]
    );
}

#[tokio::test]
async fn test_migrate_twice_reuses_destination_playlist() {
    let source = gym_source();
    let destination = matching_destination();
    let migrator = PlaylistMigrator::new(&source, &destination);

    let first = migrator.migrate("spotify-pl-1", None).await.unwrap();
    let second = migrator.migrate("spotify-pl-1", None).await.unwrap();

    assert_eq!(first, second);
    // The second run found the playlist by name instead of creating another
    assert_eq!(destination.created_count(), 1);
}

#[tokio::test]
async fn test_migrate_aborts_when_creation_fails() {
    let source = gym_source();
    let destination = FakeDestination {
        fail_create: true,
        ..Default::default()
    };
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await.unwrap();

    assert_eq!(result, None);
    // Nothing downstream of playlist resolution ran
    assert_eq!(source.fetch_count(), 0);
    assert_eq!(destination.search_count(), 0);
    assert_eq!(destination.insert_count(), 0);
}

#[tokio::test]
async fn test_migrate_returns_handle_despite_insert_failure() {
    let source = gym_source();
    let mut destination = matching_destination();
    destination.reject_inserts = true;
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await.unwrap();

    // The insert was attempted and rejected, but the playlist exists
    assert_eq!(result, Some("PL001".to_string()));
    assert_eq!(destination.insert_count(), 1);
}

#[tokio::test]
async fn test_migrate_with_name_override() {
    let source = gym_source();
    let destination = matching_destination();
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator
        .migrate("spotify-pl-1", Some("Custom Name"))
        .await
        .unwrap();

    assert_eq!(result, Some("PL001".to_string()));

    let state = destination.state.lock().unwrap();
    assert_eq!(state.find_calls, vec!["Custom Name".to_string()]);
    // Overridden name, but the description still comes from the source
    assert_eq!(
        state.created,
        vec![("Custom Name".to_string(), "Songs to lift to".to_string())]
    );
}

#[tokio::test]
async fn test_migrate_propagates_metadata_failure() {
    let mut source = gym_source();
    source.fail_metadata = true;
    let destination = matching_destination();
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await;

    assert!(matches!(result, Err(MigrateError::Source(_))));
    // The run never reached the destination
    assert_eq!(destination.created_count(), 0);
    assert_eq!(destination.insert_count(), 0);
}

#[tokio::test]
async fn test_migrate_drops_unmatched_tracks_from_insert() {
    let source = gym_source();
    // Beta has no equivalent in the destination catalog
    let destination = FakeDestination::with_songs(&[
        ("Alpha from First", "vid-a"),
        ("Gamma from Third", "vid-c"),
    ]);
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await.unwrap();

    assert_eq!(result, Some("PL001".to_string()));
    let state = destination.state.lock().unwrap();
    assert_eq!(
        state.inserts,
        vec![(
            "PL001".to_string(),
            vec!["vid-a".to_string(), "vid-c".to_string()],
            true
        )]
    );
}

#[tokio::test]
async fn test_migrate_with_no_matches_leaves_playlist_empty() {
    let source = gym_source();
    let destination = FakeDestination::default();
    let migrator = PlaylistMigrator::new(&source, &destination);

    let result = migrator.migrate("spotify-pl-1", None).await.unwrap();

    // The playlist was still created; there was just nothing to insert
    assert_eq!(result, Some("PL001".to_string()));
    assert_eq!(destination.search_count(), 3);
    assert_eq!(destination.insert_count(), 0);
}
