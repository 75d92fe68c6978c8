use crate::commands::EntryView;
use crate::error::{LexiconError, Result};
use crate::model::Entry;
use crate::store::{StorageBackend, WordStore};

/// Pairs an entry with its favorite and local-edit state.
pub fn view<B: StorageBackend>(store: &WordStore<B>, entry: &Entry) -> EntryView {
    let edited_at = store.override_for(&entry.id).map(|o| o.changed_at());
    EntryView {
        entry: entry.clone(),
        is_favorite: store.is_favorite(entry),
        is_local: edited_at.is_some(),
        edited_at,
    }
}

pub fn views<B: StorageBackend>(store: &WordStore<B>, entries: &[Entry]) -> Vec<EntryView> {
    entries.iter().map(|e| view(store, e)).collect()
}

/// Resolves each key (an id, or a word ignoring case) to an entry of the
/// effective view. Duplicates are returned once.
pub fn resolve_keys<B: StorageBackend, K: AsRef<str>>(
    store: &WordStore<B>,
    keys: &[K],
) -> Result<Vec<Entry>> {
    let mut resolved: Vec<Entry> = Vec::new();
    for key in keys {
        let key = key.as_ref();
        let entry = store
            .find(key)
            .ok_or_else(|| LexiconError::EntryNotFound(key.to_string()))?;
        if !resolved.iter().any(|e| e.id == entry.id) {
            resolved.push(entry.clone());
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_ids_and_words_once() {
        let fixture = StoreFixture::new().with_sample_words();
        let entries = resolve_keys(&fixture.store, &["Ama", "ama", "biru"]).unwrap();
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Ama", "Biru"]);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let fixture = StoreFixture::new().with_sample_words();
        assert!(matches!(
            resolve_keys(&fixture.store, &["Ama", "Cela"]),
            Err(LexiconError::EntryNotFound(key)) if key == "Cela"
        ));
    }

    #[test]
    fn view_flags_local_and_favorite() {
        let fixture = StoreFixture::new()
            .with_sample_words()
            .with_local(Entry::new("Zeta"))
            .with_favorite("Ama");
        let store = &fixture.store;
        let flags: Vec<(bool, bool)> = views(store, store.effective())
            .iter()
            .map(|v| (v.is_favorite, v.is_local))
            .collect();
        assert_eq!(flags, vec![(true, false), (false, false), (false, true)]);
    }
}
