use super::fs_backend::FsBackend;
use super::word_store::{StorageKeys, WordStore};
use std::path::PathBuf;

pub type FileWordStore = WordStore<FsBackend>;

impl FileWordStore {
    /// Opens a store whose state lives under `state_dir`, one file per key.
    pub fn new_fs(state_dir: PathBuf, namespace: &str) -> Self {
        WordStore::with_keys(FsBackend::new(state_dir), StorageKeys::new(namespace))
    }
}
