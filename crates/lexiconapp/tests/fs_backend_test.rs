use lexiconapp::store::backend::StorageBackend;
use lexiconapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("state"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing key reads as None, even before the root exists
    assert_eq!(backend.read("lexicon.favorites").unwrap(), None);

    // 2. Write creates the root
    backend.write("lexicon.favorites", "[\"Ama\"]").unwrap();
    assert_eq!(
        backend.read("lexicon.favorites").unwrap(),
        Some("[\"Ama\"]".to_string())
    );

    // 3. Remove, twice
    backend.remove("lexicon.favorites").unwrap();
    backend.remove("lexicon.favorites").unwrap();
    assert_eq!(backend.read("lexicon.favorites").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write("lexicon.overrides", "[]").unwrap();
    backend.write("lexicon.overrides", "[1]").unwrap();

    let expected_path = backend.root().join("lexicon.overrides.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[1]");

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_keys_stay_inside_root() {
    let (_dir, backend) = setup();
    let path = backend.key_path("../../etc/passwd");
    assert!(path.starts_with(backend.root()));
    assert_eq!(path.parent().unwrap(), backend.root());
}

#[test]
fn test_fs_backend_write_fails_when_root_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("state");
    fs::write(&blocker, "not a directory").unwrap();

    let backend = FsBackend::new(blocker);
    assert!(backend.write("lexicon.favorites", "[]").is_err());
}
