use crate::commands::CmdResult;
use crate::query;
use crate::store::{StorageBackend, WordStore};

/// Tags with their entry counts, plus the parts of speech in use.
pub fn run<B: StorageBackend>(store: &WordStore<B>) -> CmdResult {
    let entries = store.effective();
    CmdResult {
        tags: query::tag_counts(entries),
        parts_of_speech: query::parts_of_speech(entries),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn facets_count_effective_entries() {
        let fixture = StoreFixture::new()
            .with_sample_words()
            .with_local(Entry::new("Zeta").with_pos("noun").with_tags(["Core"]));

        let result = run(&fixture.store);
        assert_eq!(result.tags.get("core"), Some(&2));
        assert_eq!(result.tags.get("color"), Some(&1));
        assert_eq!(result.parts_of_speech, vec!["adjective", "noun"]);
    }
}
