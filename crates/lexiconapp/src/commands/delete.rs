use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, WordStore};

use super::helpers::{resolve_keys, view};

/// Removes the entries named by `keys`. Every key must resolve before
/// anything is removed.
pub fn run<B: StorageBackend, K: AsRef<str>>(
    store: &mut WordStore<B>,
    keys: &[K],
) -> Result<CmdResult> {
    let targets = resolve_keys(store, keys)?;
    let mut result = CmdResult::default();

    for entry in targets {
        let entry_view = view(store, &entry);
        let (removed, status) = store.remove(&entry.id)?;
        result.add_message(CmdMessage::success(format!("Deleted \"{}\"", removed.word)));
        result.note_persistence(&status);
        result.affected.push(entry_view);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn delete_remote_entry_leaves_marker() {
        let mut fixture = StoreFixture::new().with_sample_words();
        let result = run(&mut fixture.store, &["Biru"]).unwrap();

        assert_eq!(result.affected[0].entry.word, "Biru");
        assert!(fixture.store.find("Biru").is_none());
        assert!(fixture.store.override_for("Biru").unwrap().is_delete());
    }

    #[test]
    fn delete_local_entry_drops_override() {
        let mut fixture = StoreFixture::new().with_local(Entry::new("Zeta"));
        run(&mut fixture.store, &["zeta"]).unwrap();
        assert!(fixture.store.effective().is_empty());
        assert!(fixture.store.overrides().is_empty());
    }

    #[test]
    fn unknown_key_removes_nothing() {
        let mut fixture = StoreFixture::new().with_sample_words();
        assert!(run(&mut fixture.store, &["Ama", "Cela"]).is_err());
        assert_eq!(fixture.store.effective().len(), 2);
    }
}
