use crate::commands::{CmdMessage, CmdResult};
use crate::store::{StorageBackend, WordStore};

/// Discards every local edit, addition and deletion.
pub fn run<B: StorageBackend>(store: &mut WordStore<B>) -> CmdResult {
    let dropped = store.overrides().len();
    let status = store.reset();

    let mut result = CmdResult::default();
    let message = match dropped {
        0 => CmdMessage::info("No local changes to discard"),
        1 => CmdMessage::success("Discarded 1 local change"),
        n => CmdMessage::success(format!("Discarded {} local changes", n)),
    };
    result.add_message(message);
    result.note_persistence(&status);
    result
}
