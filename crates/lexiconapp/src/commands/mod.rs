//! # Command Layer
//!
//! This module contains the **core business logic** of lexicon. Each command
//! lives in its own submodule and implements plain functions over a
//! [`WordStore`](crate::store::WordStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, or formatting
//! - **Argument parsing**: That's the client's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries the entries to show,
//! the entries that changed, page information, facets and messages with a
//! level. A storage write that failed shows up as a warning message next to
//! an otherwise successful result.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run
//! against [`InMemoryWordStore`](crate::store::memory::InMemoryWordStore).
//!
//! ## Command Modules
//!
//! - [`load`]: Read the word list into the store
//! - [`search`]: Query the effective view
//! - [`show`]: Look entries up by id or word
//! - [`add`]: Create local entries
//! - [`edit`]: Change existing entries
//! - [`delete`]: Remove entries
//! - [`favorite`]: Toggle favorites
//! - [`reset`]: Drop every local change
//! - [`export`]: Write the effective view to JSON
//! - [`letters`]: Alphabet index
//! - [`facets`]: Tags and parts of speech on offer
//! - [`helpers`]: Shared utilities

use crate::model::Entry;
use crate::query::Page;
use crate::store::PersistStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod facets;
pub mod favorite;
pub mod helpers;
pub mod letters;
pub mod load;
pub mod reset;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An entry paired with the per-entry state clients display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub entry: Entry,
    pub is_favorite: bool,
    /// Whether the entry comes from (or replaces remote data with) a local edit.
    pub is_local: bool,
    pub edited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed: Vec<EntryView>,
    pub affected: Vec<EntryView>,
    pub page: Option<PageInfo>,
    pub letters: Vec<char>,
    pub tags: BTreeMap<String, usize>,
    pub parts_of_speech: Vec<String>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, entries: Vec<EntryView>) -> Self {
        self.listed = entries;
        self
    }

    pub fn with_affected(mut self, entries: Vec<EntryView>) -> Self {
        self.affected = entries;
        self
    }

    /// Turns a failed storage write into a warning message.
    pub fn note_persistence(&mut self, status: &PersistStatus) {
        if let Some(reason) = status.failure() {
            self.add_message(CmdMessage::warning(format!(
                "Change kept for this session only: {}",
                reason
            )));
        }
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Page metadata without the items, which travel in `listed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
    pub has_more: bool,
}

impl From<&Page> for PageInfo {
    fn from(page: &Page) -> Self {
        Self {
            page_index: page.page_index,
            page_size: page.page_size,
            page_count: page.page_count(),
            total: page.total,
            has_more: page.has_more,
        }
    }
}

/// Field changes for [`edit`]. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub word: Option<String>,
    pub pos: Option<String>,
    pub definition: Option<String>,
    pub usage: Option<String>,
    pub etymology: Option<String>,
    pub tags: Option<Vec<String>>,
    pub related: Option<Vec<String>>,
    pub icon: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.word.is_none()
            && self.pos.is_none()
            && self.definition.is_none()
            && self.usage.is_none()
            && self.etymology.is_none()
            && self.tags.is_none()
            && self.related.is_none()
            && self.icon.is_none()
    }

    pub fn apply(self, entry: Entry) -> Entry {
        let mut entry = entry;
        if let Some(word) = self.word {
            entry.word = word;
        }
        if let Some(pos) = self.pos {
            entry.pos = pos;
        }
        if let Some(definition) = self.definition {
            entry.definition = definition;
        }
        if let Some(usage) = self.usage {
            entry.usage = usage;
        }
        if let Some(etymology) = self.etymology {
            entry.etymology = etymology;
        }
        if let Some(icon) = self.icon {
            entry = entry.with_icon(crate::model::Icon::parse(&icon));
        }
        if let Some(tags) = self.tags {
            entry = entry.with_tags(tags);
        }
        if let Some(related) = self.related {
            entry = entry.with_related(related);
        }
        entry
    }
}
