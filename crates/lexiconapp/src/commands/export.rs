use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export;
use crate::store::{StorageBackend, WordStore};
use std::path::Path;

/// Writes the effective view as a JSON array. A directory target gets a
/// timestamped file name.
pub fn run<B: StorageBackend>(store: &WordStore<B>, target: &Path) -> Result<CmdResult> {
    let entries = store.effective();
    let path = export::write_export(entries, target)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} words to {}",
        entries.len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}
