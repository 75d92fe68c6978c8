use super::mem_backend::MemBackend;
use super::word_store::WordStore;

pub type InMemoryWordStore = WordStore<MemBackend>;

impl Default for InMemoryWordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        WordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Entry;

    pub struct StoreFixture {
        pub store: InMemoryWordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryWordStore::new(),
            }
        }

        /// Loads the small two-word list used across command tests.
        pub fn with_sample_words(mut self) -> Self {
            self.store.load(vec![
                Entry::new("Ama")
                    .with_pos("noun")
                    .with_definition("love")
                    .with_usage("Ama mi kasih")
                    .with_tags(["core"]),
                Entry::new("Biru")
                    .with_pos("adjective")
                    .with_definition("blue")
                    .with_tags(["rare", "color"]),
            ]);
            self
        }

        pub fn with_remote(mut self, entries: Vec<Entry>) -> Self {
            self.store.load(entries);
            self
        }

        pub fn with_local(mut self, entry: Entry) -> Self {
            self.store.upsert(entry).unwrap();
            self
        }

        pub fn with_favorite(mut self, key: &str) -> Self {
            self.store.toggle_favorite(key);
            self
        }
    }
}
