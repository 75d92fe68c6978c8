use super::backend::StorageBackend;
use crate::error::{LexiconError, Result};
use crate::model::{Entry, Override};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_NAMESPACE: &str = "lexicon";

/// The two storage keys a store reads and writes, derived from a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub favorites: String,
    pub overrides: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            favorites: format!("{}.favorites", namespace),
            overrides: format!("{}.overrides", namespace),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Outcome of the storage write attempted by a mutation.
///
/// The in-memory change has already happened either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Saved,
    Failed(String),
}

impl PersistStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistStatus::Saved)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            PersistStatus::Saved => None,
            PersistStatus::Failed(reason) => Some(reason),
        }
    }
}

/// Owns the word collection: the remote list, the local override layer and
/// the favorites set.
///
/// Only overrides and favorites are persisted. The effective view is rebuilt
/// after every mutation, so callers always read current state.
pub struct WordStore<B: StorageBackend> {
    backend: B,
    keys: StorageKeys,
    remote: Vec<Entry>,
    overrides: Vec<Override>,
    favorites: BTreeSet<String>,
    effective: Vec<Entry>,
}

impl<B: StorageBackend> WordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    /// Creates a store and hydrates overrides and favorites from `backend`.
    /// Unreadable or corrupt stored values start out empty.
    pub fn with_keys(backend: B, keys: StorageKeys) -> Self {
        let overrides: Vec<Override> = hydrate(&backend, &keys.overrides);
        let favorites: Vec<String> = hydrate(&backend, &keys.favorites);
        let mut store = Self {
            backend,
            keys,
            remote: Vec::new(),
            overrides,
            favorites: favorites.into_iter().collect(),
            effective: Vec::new(),
        };
        store.recompute();
        store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Replaces the remote list. Records without a word are dropped and
    /// records without an id take their word as id. Returns the number kept.
    pub fn load(&mut self, entries: Vec<Entry>) -> usize {
        self.remote = entries
            .into_iter()
            .filter_map(|mut entry| {
                entry.normalize();
                if entry.word.is_empty() {
                    return None;
                }
                if entry.id.is_empty() {
                    entry.id = entry.word.clone();
                }
                Some(entry)
            })
            .collect();
        self.recompute();
        self.remote.len()
    }

    /// Loads a raw JSON payload. Anything other than an array loads as an
    /// empty list.
    pub fn load_json(&mut self, payload: &Value) -> usize {
        let entries = match payload.as_array() {
            Some(items) => {
                let entries: Vec<Entry> = items.iter().filter_map(Entry::from_value).collect();
                if entries.len() < items.len() {
                    debug!(
                        skipped = items.len() - entries.len(),
                        "skipped word list records without a word"
                    );
                }
                entries
            }
            None => {
                warn!("word list payload is not an array, loading zero entries");
                Vec::new()
            }
        };
        self.load(entries)
    }

    pub fn remote(&self) -> &[Entry] {
        &self.remote
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    pub fn effective(&self) -> &[Entry] {
        &self.effective
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, entry: &Entry) -> bool {
        self.favorites.contains(&entry.word) || self.favorites.contains(&entry.id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.effective.iter().find(|e| e.id == id)
    }

    /// Looks an entry up by id, then by word ignoring case.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        let key = key.trim();
        self.get(key).or_else(|| {
            let lower = key.to_lowercase();
            self.effective
                .iter()
                .find(|e| e.word.to_lowercase() == lower)
        })
    }

    pub fn override_for(&self, id: &str) -> Option<&Override> {
        self.overrides.iter().find(|o| o.id() == id)
    }

    /// Adds or replaces an entry in the override layer.
    ///
    /// An entry without an id gets a generated one. Returns the stored entry.
    pub fn upsert(&mut self, mut entry: Entry) -> Result<(Entry, PersistStatus)> {
        entry.normalize();
        if entry.word.is_empty() {
            return Err(LexiconError::InvalidEntry(
                "word must not be empty".to_string(),
            ));
        }
        if entry.id.is_empty() {
            entry.id = format!("local-{}", Uuid::new_v4());
        }

        self.set_override(Override::upsert(entry.clone()));
        let status = self.persist_overrides();
        self.recompute();
        Ok((entry, status))
    }

    /// Removes an entry from the effective view.
    ///
    /// Entries that exist in the remote list get a persisted delete marker so
    /// a reload does not bring them back. Local-only entries simply lose their
    /// override record.
    pub fn remove(&mut self, id: &str) -> Result<(Entry, PersistStatus)> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| LexiconError::EntryNotFound(id.to_string()))?;

        if self.remote.iter().any(|e| e.id == id) {
            self.set_override(Override::delete(id));
        } else {
            self.overrides.retain(|o| o.id() != id);
        }

        let status = self.persist_overrides();
        self.recompute();
        Ok((removed, status))
    }

    /// Flips membership of `key` in the favorites set. Returns whether the key
    /// is a favorite afterwards.
    pub fn toggle_favorite(&mut self, key: &str) -> (bool, PersistStatus) {
        let key = key.trim().to_string();
        let now_favorite = if self.favorites.remove(&key) {
            false
        } else {
            self.favorites.insert(key);
            true
        };
        let status = self.persist(&self.keys.favorites, &self.favorites);
        (now_favorite, status)
    }

    /// Drops every override and delete marker; the effective view becomes the
    /// remote list again.
    pub fn reset(&mut self) -> PersistStatus {
        self.overrides.clear();
        self.recompute();
        match self.backend.remove(&self.keys.overrides) {
            Ok(()) => PersistStatus::Saved,
            Err(e) => persist_failed(&self.keys.overrides, e),
        }
    }

    fn set_override(&mut self, record: Override) {
        match self.overrides.iter_mut().find(|o| o.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.overrides.push(record),
        }
    }

    fn persist_overrides(&self) -> PersistStatus {
        self.persist(&self.keys.overrides, &self.overrides)
    }

    fn persist<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> PersistStatus {
        let result = serde_json::to_string(value)
            .map_err(LexiconError::Serialization)
            .and_then(|json| self.backend.write(key, &json));
        match result {
            Ok(()) => PersistStatus::Saved,
            Err(e) => persist_failed(key, e),
        }
    }

    fn recompute(&mut self) {
        let by_id: HashMap<&str, &Override> =
            self.overrides.iter().map(|o| (o.id(), o)).collect();

        let mut effective = Vec::with_capacity(self.remote.len() + self.overrides.len());
        let mut remote_ids: HashSet<&str> = HashSet::new();
        for entry in &self.remote {
            remote_ids.insert(entry.id.as_str());
            match by_id.get(entry.id.as_str()) {
                Some(Override::Upsert { entry: local, .. }) => effective.push(local.clone()),
                Some(Override::Delete { .. }) => {}
                None => effective.push(entry.clone()),
            }
        }
        for record in &self.overrides {
            if let Override::Upsert { entry, .. } = record {
                if !remote_ids.contains(entry.id.as_str()) {
                    effective.push(entry.clone());
                }
            }
        }
        self.effective = effective;
    }
}

fn persist_failed(key: &str, err: LexiconError) -> PersistStatus {
    warn!(key, error = %err, "storage write failed, keeping change in memory only");
    PersistStatus::Failed(err.to_string())
}

fn hydrate<T: DeserializeOwned>(backend: &impl StorageBackend, key: &str) -> Vec<T> {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "could not read stored value, starting empty");
            return Vec::new();
        }
    };
    let items: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "stored value is not a JSON array, starting empty");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "skipping unreadable stored record");
                None
            }
        })
        .collect()
}
