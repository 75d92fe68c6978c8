use crate::commands::CmdResult;
use crate::query;
use crate::store::{StorageBackend, WordStore};

/// The distinct initial letters of the effective view, for an A-Z index.
pub fn run<B: StorageBackend>(store: &WordStore<B>) -> CmdResult {
    CmdResult {
        letters: query::alphabet_index(store.effective()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn letters_follow_effective_view() {
        let mut fixture = StoreFixture::new()
            .with_sample_words()
            .with_local(Entry::new("zeta"));
        fixture.store.remove("Biru").unwrap();

        assert_eq!(run(&fixture.store).letters, vec!['A', 'Z']);
    }
}
