use crate::commands::{CmdMessage, CmdResult, EntryUpdate};
use crate::error::{LexiconError, Result};
use crate::store::{StorageBackend, WordStore};

use super::helpers::view;

/// Applies `update` to the entry found by `key`, keeping its id.
///
/// Editing a remote entry stores the edited copy as an override, so the
/// change survives the next load. A renamed favorite stays a favorite.
pub fn run<B: StorageBackend>(
    store: &mut WordStore<B>,
    key: &str,
    update: EntryUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::error("Nothing to change"));
        return Ok(result);
    }

    let current = store
        .find(key)
        .cloned()
        .ok_or_else(|| LexiconError::EntryNotFound(key.to_string()))?;
    let was_favorite = store.favorites().contains(&current.word);
    let old_word = current.word.clone();

    let (stored, status) = store.upsert(update.apply(current))?;
    result.note_persistence(&status);

    if was_favorite && stored.word != old_word {
        store.toggle_favorite(&old_word);
        let (_, status) = store.toggle_favorite(&stored.word);
        result.note_persistence(&status);
    }

    result.affected.push(view(store, &stored));
    result
        .messages
        .insert(0, CmdMessage::success(format!("Updated \"{}\"", stored.word)));
    Ok(result)
}
