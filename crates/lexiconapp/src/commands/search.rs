use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::query::{self, QuerySpec};
use crate::store::{StorageBackend, WordStore};

use super::helpers::views;

pub fn run<B: StorageBackend>(store: &WordStore<B>, spec: &QuerySpec) -> CmdResult {
    let page = query::query(store.effective(), store.favorites(), spec);

    let mut result = CmdResult::default().with_listed(views(store, &page.items));
    if page.total == 0 {
        result.add_message(CmdMessage::info("No words match."));
    } else if page.items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Page {} is past the last page ({}).",
            page.page_index.saturating_add(1),
            page.page_count()
        )));
    }
    result.page = Some(PageInfo::from(&page));
    result
}
