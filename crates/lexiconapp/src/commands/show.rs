use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{StorageBackend, WordStore};

use super::helpers::{resolve_keys, views};

pub fn run<B: StorageBackend, K: AsRef<str>>(store: &WordStore<B>, keys: &[K]) -> Result<CmdResult> {
    let entries = resolve_keys(store, keys)?;
    Ok(CmdResult::default().with_listed(views(store, &entries)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_entries_in_request_order() {
        let fixture = StoreFixture::new().with_sample_words();
        let result = run(&fixture.store, &["biru", "Ama"]).unwrap();
        let words: Vec<&str> = result.listed.iter().map(|v| v.entry.word.as_str()).collect();
        assert_eq!(words, vec!["Biru", "Ama"]);
    }

    #[test]
    fn unknown_word_fails() {
        let fixture = StoreFixture::new().with_sample_words();
        assert!(run(&fixture.store, &["Cela"]).is_err());
    }
}
