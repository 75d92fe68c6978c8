use crate::commands::{CmdMessage, CmdResult};
use crate::error::LexiconError;
use crate::loader;
use crate::store::{StorageBackend, WordStore};
use std::path::Path;
use tracing::debug;

/// Loads the word list into the store.
///
/// Never fails: a missing or malformed list leaves the store with an empty
/// remote list and reports a warning. Local entries stay available.
pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &mut WordStore<B>,
    base: &Path,
    candidates: &[S],
) -> CmdResult {
    let mut result = CmdResult::default();
    match loader::load_dataset(base, candidates) {
        Ok(entries) => {
            let count = store.load(entries);
            result.add_message(CmdMessage::info(format!("Loaded {} words", count)));
        }
        Err(e) => {
            debug!(error = %e, "word list unavailable, continuing with local entries only");
            store.load(Vec::new());
            result.add_message(CmdMessage::warning(degraded_message(&e)));
        }
    }
    result
}

fn degraded_message(err: &LexiconError) -> String {
    match err {
        LexiconError::DataFormat(_) => format!("Word list could not be read. {}", err),
        _ => format!("{}. Showing local entries only.", err),
    }
}
