use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::{StorageBackend, WordStore};

use super::helpers::view;

/// Adds a local entry. An entry carrying the id of an existing one replaces
/// it instead.
pub fn run<B: StorageBackend>(store: &mut WordStore<B>, entry: Entry) -> Result<CmdResult> {
    let (stored, status) = store.upsert(entry)?;

    let mut result = CmdResult::default().with_affected(vec![view(store, &stored)]);
    result.add_message(CmdMessage::success(format!("Added \"{}\"", stored.word)));
    result.note_persistence(&status);
    Ok(result)
}
