//! Reopening a file-backed store must show the same effective view.

use lexiconapp::model::Entry;
use lexiconapp::query::{query, QuerySpec};
use lexiconapp::store::fs::FileWordStore;
use std::fs;
use tempfile::TempDir;

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("Ama").with_pos("noun").with_definition("love"),
        Entry::new("Biru").with_pos("adjective").with_definition("blue"),
        Entry::new("Cela").with_pos("noun").with_definition("gap"),
    ]
}

fn open(dir: &TempDir) -> FileWordStore {
    let mut store = FileWordStore::new_fs(dir.path().to_path_buf(), "lexicon");
    store.load(sample());
    store
}

fn words(store: &FileWordStore) -> Vec<String> {
    store.effective().iter().map(|e| e.word.clone()).collect()
}

#[test]
fn deleted_remote_word_stays_deleted_after_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        let (_, status) = store.remove("Biru").unwrap();
        assert!(status.is_saved());
    }

    let store = open(&dir);
    assert_eq!(words(&store), vec!["Ama", "Cela"]);
}

#[test]
fn local_adds_and_edits_survive_reload() {
    let dir = TempDir::new().unwrap();
    let added_id = {
        let mut store = open(&dir);
        let (added, _) = store.upsert(Entry::new("Zeta").with_tags(["new"])).unwrap();
        let ama = store.get("Ama").cloned().unwrap();
        store.upsert(ama.with_definition("deep love")).unwrap();
        added.id
    };

    let store = open(&dir);
    assert_eq!(store.get(&added_id).unwrap().word, "Zeta");
    assert_eq!(store.get("Ama").unwrap().definition, "deep love");
    assert_eq!(store.effective().len(), 4);
}

#[test]
fn favorites_survive_reload_and_filter_queries() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        store.toggle_favorite("Cela");
        store.toggle_favorite("Ama");
        store.toggle_favorite("Ama");
    }

    let store = open(&dir);
    let page = query(
        store.effective(),
        store.favorites(),
        &QuerySpec::new().favorites_only(true),
    );
    let listed: Vec<&str> = page.items.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(listed, vec!["Cela"]);
}

#[test]
fn namespaces_do_not_share_state() {
    let dir = TempDir::new().unwrap();
    let mut first = FileWordStore::new_fs(dir.path().to_path_buf(), "one");
    first.load(sample());
    first.toggle_favorite("Ama");

    let second = FileWordStore::new_fs(dir.path().to_path_buf(), "two");
    assert!(second.favorites().is_empty());
}

#[test]
fn reset_clears_persisted_overrides() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        store.remove("Ama").unwrap();
        store.reset();
    }
    let store = open(&dir);
    assert_eq!(words(&store), vec!["Ama", "Biru", "Cela"]);
}

#[test]
fn corrupt_state_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lexicon.favorites.json"), "{not json").unwrap();
    fs::write(dir.path().join("lexicon.overrides.json"), "42").unwrap();

    let store = open(&dir);
    assert!(store.favorites().is_empty());
    assert_eq!(store.effective().len(), 3);
}

#[test]
fn unwritable_state_keeps_session_changes() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("state");
    fs::write(&blocker, "file in the way").unwrap();

    let mut store = FileWordStore::new_fs(blocker, "lexicon");
    store.load(sample());
    let (_, status) = store.remove("Ama").unwrap();
    assert!(!status.is_saved());
    assert_eq!(words(&store), vec!["Biru", "Cela"]);

    let (favorite, status) = store.toggle_favorite("Biru");
    assert!(favorite);
    assert!(status.failure().is_some());
}
