use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LexiconError, Result};
use crate::store::{StorageBackend, WordStore};

use super::helpers::view;

/// Toggles the favorite flag of the entry found by `key`. Favorites are
/// recorded by word.
pub fn run<B: StorageBackend>(store: &mut WordStore<B>, key: &str) -> Result<CmdResult> {
    let entry = store
        .find(key)
        .cloned()
        .ok_or_else(|| LexiconError::EntryNotFound(key.to_string()))?;

    // An entry may have been favorited by id through older data
    let (now_favorite, status) = if store.favorites().contains(&entry.id) && entry.id != entry.word
    {
        store.toggle_favorite(&entry.id)
    } else {
        store.toggle_favorite(&entry.word)
    };

    let mut result = CmdResult::default().with_affected(vec![view(store, &entry)]);
    let verb = if now_favorite { "Favorited" } else { "Unfavorited" };
    result.add_message(CmdMessage::success(format!("{} \"{}\"", verb, entry.word)));
    result.note_persistence(&status);
    Ok(result)
}
