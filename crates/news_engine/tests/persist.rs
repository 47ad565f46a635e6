use std::fs;
use std::sync::Arc;

use news_core::{BookmarkSet, BOOKMARKS_KEY};
use news_engine::{ensure_store_dir, BookmarkStore, FileStore, KeyValueStore};
use tempfile::TempDir;

#[test]
fn creates_missing_store_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_store_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn missing_key_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().to_path_buf());

    assert_eq!(store.get("absent").unwrap(), None);
}

#[test]
fn set_replaces_existing_value() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("nested"));

    store.set("k", "hello").unwrap();
    store.set("k", "world").unwrap();

    assert_eq!(store.get("k").unwrap().as_deref(), Some("world"));
    assert_eq!(
        fs::read_to_string(store.path_for("k")).unwrap(),
        "world"
    );
}

#[test]
fn set_fails_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let store = FileStore::new(file_path.clone());
    assert!(store.set("k", "data").is_err());
    assert!(!file_path.with_file_name("k.json").exists());
}

#[test]
fn bookmarks_survive_a_restart() {
    let temp = TempDir::new().unwrap();
    let store = BookmarkStore::new(Arc::new(FileStore::new(temp.path().to_path_buf())));
    let (set, _) = BookmarkSet::new().toggle("world/a");
    let (set, _) = set.toggle("sport/b");

    store.save(&set).unwrap();

    let reopened = BookmarkStore::new(Arc::new(FileStore::new(temp.path().to_path_buf())));
    assert_eq!(reopened.load(), set);
    assert_eq!(
        fs::read_to_string(temp.path().join(format!("{BOOKMARKS_KEY}.json"))).unwrap(),
        r#"["sport/b","world/a"]"#
    );
}

#[test]
fn corrupt_file_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(format!("{BOOKMARKS_KEY}.json")), "[\"a\",").unwrap();

    let store = BookmarkStore::new(Arc::new(FileStore::new(temp.path().to_path_buf())));
    assert!(store.load().is_empty());
}
