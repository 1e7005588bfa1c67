use tempfile::TempDir;
use tremr_core::EventIdentity;
use tremr_store::{Paths, SeenEventSet, SeenStore};

#[test]
fn test_store_survives_restart() {
    let temp = TempDir::new().unwrap();
    let paths = Paths::with_data_dir(temp.path());

    // Session 1
    let store = SeenStore::new(paths.seen_file());
    let mut set = store.load();
    set.add(EventIdentity::new("29 October 2025_08:26 AM_14.60_120.98"));
    store.persist(&set).unwrap();

    // Session 2
    let reopened = SeenStore::new(paths.seen_file()).load();
    assert!(reopened.contains(&EventIdentity::new("29 October 2025_08:26 AM_14.60_120.98")));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_unpersisted_additions_are_lost_on_restart() {
    let temp = TempDir::new().unwrap();
    let store = SeenStore::new(temp.path().join("seen_earthquakes.json"));

    let mut set = SeenEventSet::new();
    set.add(EventIdentity::new("persisted"));
    store.persist(&set).unwrap();

    // Added in memory, process dies before persist
    set.add(EventIdentity::new("in-flight"));
    drop(set);

    let reloaded = store.load();
    assert!(reloaded.contains(&EventIdentity::new("persisted")));
    assert!(!reloaded.contains(&EventIdentity::new("in-flight")));
}

#[test]
fn test_truncated_file_fails_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen_earthquakes.json");
    std::fs::write(&path, r#"["a","b"#).unwrap();

    let store = SeenStore::new(&path);
    let set = store.load();
    assert!(set.is_empty());

    // The next persist replaces the corrupt file
    let mut set = set;
    set.add(EventIdentity::new("c"));
    store.persist(&set).unwrap();
    assert_eq!(store.load().len(), 1);
}
