//! # Query Engine
//!
//! Turns the effective word list plus a [`QuerySpec`] into one [`Page`].
//!
//! ## Pipeline
//!
//! ```text
//! entries ─▶ favorites? ─▶ tags ─▶ pos ─▶ text ─▶ sort by word ─▶ slice page
//! ```
//!
//! Each predicate short-circuits: the first one that fails drops the entry.
//!
//! - **Favorites**: with `favorites_only`, the entry's word or id must be in
//!   the favorites set.
//! - **Tags**: an empty accepted set places no restriction. Otherwise the
//!   entry needs at least one tag (compared lower-cased) in the set.
//! - **Part of speech**: exact match when set.
//! - **Text**: the trimmed, lower-cased query must occur as a contiguous
//!   substring of `word definition usage`, lower-cased. An empty query
//!   matches everything.
//!
//! Survivors are sorted by word with [`collation_cmp`]: accents and case are
//! ignored first, so "Élan" sits between "Ama" and "Oso". The sort is stable,
//! so words that compare equal keep their collection order.
//!
//! ## Purity
//!
//! [`query`] does no I/O and keeps no state. The same inputs always give the
//! same page. "Load more" is the caller asking for `page_index + 1`.

use crate::model::Entry;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub text: String,
    /// Accepted tags, lower-cased. Empty means no tag restriction.
    pub tags: BTreeSet<String>,
    pub pos: Option<String>,
    pub favorites_only: bool,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            tags: BTreeSet::new(),
            pos: None,
            favorites_only: false,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() {
            self.tags.insert(tag);
        }
        self
    }

    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        tags.into_iter().fold(self, |spec, tag| spec.with_tag(tag))
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        let pos = pos.into().trim().to_string();
        self.pos = if pos.is_empty() { None } else { Some(pos) };
        self
    }

    pub fn favorites_only(mut self, only: bool) -> Self {
        self.favorites_only = only;
        self
    }

    pub fn page(mut self, page_index: usize, page_size: usize) -> Self {
        self.page_index = page_index;
        self.page_size = page_size;
        self
    }

    /// Alphabet-index selection: the letter becomes the free-text query.
    pub fn for_letter(self, letter: char) -> Self {
        self.with_text(letter.to_string())
    }

    fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }

    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub items: Vec<Entry>,
    pub total: usize,
    pub has_more: bool,
    pub page_index: usize,
    pub page_size: usize,
}

impl Page {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Runs the filter, sort and paging pipeline over `entries`.
pub fn query(entries: &[Entry], favorites: &BTreeSet<String>, spec: &QuerySpec) -> Page {
    let needle = spec.needle();

    let mut matched: Vec<&Entry> = entries
        .iter()
        .filter(|e| matches_entry(e, favorites, spec, &needle))
        .collect();

    // sort_by_cached_key is stable: equal words keep collection order
    matched.sort_by_cached_key(|e| collation_key(&e.word));

    let total = matched.len();
    let page_size = spec.effective_page_size();
    let start = spec.page_index.saturating_mul(page_size);

    let (items, has_more) = if start >= total {
        (Vec::new(), false)
    } else {
        let end = start.saturating_add(page_size).min(total);
        let items = matched[start..end].iter().map(|e| (*e).clone()).collect();
        (items, end < total)
    };

    Page {
        items,
        total,
        has_more,
        page_index: spec.page_index,
        page_size,
    }
}

fn matches_entry(
    entry: &Entry,
    favorites: &BTreeSet<String>,
    spec: &QuerySpec,
    needle: &str,
) -> bool {
    if spec.favorites_only && !(favorites.contains(&entry.word) || favorites.contains(&entry.id))
    {
        return false;
    }

    if !spec.tags.is_empty() && !entry.normalized_tags().any(|t| spec.tags.contains(&t)) {
        return false;
    }

    if let Some(pos) = &spec.pos {
        if entry.pos != *pos {
            return false;
        }
    }

    needle.is_empty() || entry.haystack().contains(needle)
}

/// Word ordering for result lists.
///
/// The primary key is the word decomposed (NFD), stripped of combining marks
/// and lower-cased, so "élan" sorts with the e's. Words that tie on it are
/// ordered by their plain lower-cased form, which puts "elan" before "élan".
/// Words equal ignoring case compare equal, leaving their relative order to
/// the stable sort.
pub fn collation_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn collation_key(word: &str) -> (String, String) {
    let base: String = word
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    (base, word.to_lowercase())
}

/// Upper-cased first letters present across `entries`, sorted by code point.
pub fn alphabet_index(entries: &[Entry]) -> Vec<char> {
    entries
        .iter()
        .filter_map(|e| e.word.chars().next())
        .filter_map(|c| c.to_uppercase().next())
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// How many entries carry each tag, keyed lower-cased.
pub fn tag_counts(entries: &[Entry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        let distinct: BTreeSet<String> = entry.normalized_tags().collect();
        for tag in distinct {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}

/// Distinct non-empty parts of speech, sorted.
pub fn parts_of_speech(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !e.pos.is_empty())
        .map(|e| e.pos.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
