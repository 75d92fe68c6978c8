//! # Domain Model: Entries, Icons and Overrides
//!
//! An [`Entry`] is one dictionary item. Word lists arrive as loosely shaped JSON
//! written by hand, so every record goes through [`Entry::from_value`] before it
//! reaches the store. After normalization:
//!
//! - `word` is trimmed and non-empty (records without one are dropped).
//! - Every other field holds a concrete value. Missing strings become `""`,
//!   missing or malformed lists become `[]`. Matching code never has to ask
//!   whether a field exists.
//! - `id` is always set. Remote records without one take their trimmed `word`
//!   as id, so favorites and overrides written against the word keep working.
//!
//! ## Icons
//!
//! The raw `icon` string uses prefix conventions. They are decoded once, here,
//! into [`Icon`]:
//!
//! | Raw value            | Variant              |
//! |----------------------|----------------------|
//! | `""`                 | `Icon::None`         |
//! | `svg:<svg …/>`       | `Icon::Inline`       |
//! | `<svg …/>`           | `Icon::Inline`       |
//! | `char:★` or `★`      | `Icon::Glyph`        |
//! | `heart.svg`          | `Icon::FileRef`      |
//!
//! `Icon` serializes back to the prefixed string form so stored overrides and
//! exports keep the same shape as the source data.
//!
//! ## Overrides
//!
//! Local edits are [`Override`] records: an upsert carrying the full entry, or a
//! delete marker carrying only the id. See [`crate::store`] for how they are
//! layered over the remote list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SVG_PREFIX: &str = "svg:";
const CHAR_PREFIX: &str = "char:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    #[default]
    None,
    Inline(String),
    Glyph(char),
    FileRef(String),
}

impl Icon {
    pub fn is_none(&self) -> bool {
        matches!(self, Icon::None)
    }

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Icon::None;
        }
        if let Some(markup) = raw.strip_prefix(SVG_PREFIX) {
            return Icon::Inline(markup.trim().to_string());
        }
        if raw.starts_with('<') {
            return Icon::Inline(raw.to_string());
        }
        if let Some(glyph) = raw.strip_prefix(CHAR_PREFIX) {
            return match glyph.trim().chars().next() {
                Some(c) => Icon::Glyph(c),
                None => Icon::None,
            };
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Icon::Glyph(c),
            _ => Icon::FileRef(raw.to_string()),
        }
    }
}

impl From<String> for Icon {
    fn from(raw: String) -> Self {
        Icon::parse(&raw)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::None => String::new(),
            Icon::Inline(markup) => format!("{}{}", SVG_PREFIX, markup),
            Icon::Glyph(c) => format!("{}{}", CHAR_PREFIX, c),
            Icon::FileRef(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: String,
    pub word: String,
    pub pos: String,
    pub definition: String,
    pub usage: String,
    pub etymology: String,
    pub tags: Vec<String>,
    pub related: Vec<String>,
    #[serde(skip_serializing_if = "Icon::is_none")]
    pub icon: Icon,
}

impl Entry {
    /// Creates an entry with only a word. The id is left empty; the store
    /// assigns one on upsert.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_etymology(mut self, etymology: impl Into<String>) -> Self {
        self.etymology = etymology.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = clean_list(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_related<I, T>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.related = clean_list(related.into_iter().map(Into::into));
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Normalizes one record of a remote word list.
    ///
    /// Returns `None` for anything that is not an object or has no usable
    /// `word`; the caller skips such records.
    pub fn from_value(value: &Value) -> Option<Entry> {
        let obj = value.as_object()?;
        let word = string_field(obj.get("word"));
        if word.is_empty() {
            return None;
        }
        let id = match string_field(obj.get("id")) {
            id if id.is_empty() => word.clone(),
            id => id,
        };

        Some(Entry {
            id,
            pos: string_field(obj.get("pos")),
            definition: string_field(obj.get("definition")),
            usage: string_field(obj.get("usage")),
            etymology: string_field(obj.get("etymology")),
            tags: list_field(obj.get("tags")),
            related: list_field(obj.get("related")),
            icon: Icon::parse(&string_field(obj.get("icon"))),
            word,
        })
    }

    /// Trims text fields and drops blank list members in place.
    pub(crate) fn normalize(&mut self) {
        self.id = self.id.trim().to_string();
        self.word = self.word.trim().to_string();
        self.pos = self.pos.trim().to_string();
        self.tags = clean_list(std::mem::take(&mut self.tags));
        self.related = clean_list(std::mem::take(&mut self.related));
    }

    /// Lower-cased tags, the form tag filters compare against.
    pub fn normalized_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.iter().map(|t| t.to_lowercase())
    }

    /// The text free-text search runs against.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.word, self.definition, self.usage).to_lowercase()
    }
}

fn string_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn list_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => clean_list(
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string)),
        ),
        _ => Vec::new(),
    }
}

fn clean_list<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// One record of the local override layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Override {
    Upsert {
        entry: Entry,
        updated_at: DateTime<Utc>,
    },
    Delete {
        id: String,
        deleted_at: DateTime<Utc>,
    },
}

impl Override {
    pub fn upsert(entry: Entry) -> Self {
        Override::Upsert {
            entry,
            updated_at: Utc::now(),
        }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Override::Delete {
            id: id.into(),
            deleted_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Override::Upsert { entry, .. } => &entry.id,
            Override::Delete { id, .. } => id,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Override::Delete { .. })
    }

    pub fn changed_at(&self) -> DateTime<Utc> {
        match self {
            Override::Upsert { updated_at, .. } => *updated_at,
            Override::Delete { deleted_at, .. } => *deleted_at,
        }
    }
}
