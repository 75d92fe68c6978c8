//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for lexicon operations, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies context** the commands need (dataset base, icon directory)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Keys
//!
//! Operations on single entries take a key: an entry id, or a word matched
//! ignoring case. Ids win, so a local entry can always be addressed even when
//! it shares its word with a remote one.
//!
//! ## Generic Over StorageBackend
//!
//! `LexiconApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `LexiconApi<FsBackend>`
//! - Testing: `LexiconApi<MemBackend>`
//!
//! API tests check dispatch and argument passing only. Command behavior is
//! tested in the command modules.

use crate::commands;
use crate::error::Result;
use crate::icon::IconResolver;
use crate::model::Entry;
use crate::query::QuerySpec;
use crate::store::{StorageBackend, WordStore};
use std::path::{Path, PathBuf};

/// Filesystem locations the API works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    /// Where favorites, overrides and the config file live.
    pub state_dir: PathBuf,
    /// Directory the word list candidates are resolved against.
    pub dataset_base: PathBuf,
    pub icon_dir: PathBuf,
}

/// The main API facade for lexicon operations.
pub struct LexiconApi<B: StorageBackend> {
    store: WordStore<B>,
    paths: LexiconPaths,
}

impl<B: StorageBackend> LexiconApi<B> {
    pub fn new(store: WordStore<B>, paths: LexiconPaths) -> Self {
        Self { store, paths }
    }

    /// Loads (or reloads) the word list from the first readable candidate.
    /// Never fails; see [`commands::load`].
    pub fn load_words<S: AsRef<str>>(&mut self, candidates: &[S]) -> CmdResult {
        commands::load::run(&mut self.store, &self.paths.dataset_base, candidates)
    }

    pub fn search(&self, spec: &QuerySpec) -> CmdResult {
        commands::search::run(&self.store, spec)
    }

    pub fn show<K: AsRef<str>>(&self, keys: &[K]) -> Result<CmdResult> {
        commands::show::run(&self.store, keys)
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<CmdResult> {
        commands::add::run(&mut self.store, entry)
    }

    pub fn edit_entry(&mut self, key: &str, update: EntryUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, key, update)
    }

    pub fn delete_entries<K: AsRef<str>>(&mut self, keys: &[K]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, keys)
    }

    pub fn toggle_favorite(&mut self, key: &str) -> Result<CmdResult> {
        commands::favorite::run(&mut self.store, key)
    }

    pub fn reset_local(&mut self) -> CmdResult {
        commands::reset::run(&mut self.store)
    }

    pub fn export(&self, target: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, target)
    }

    pub fn letters(&self) -> CmdResult {
        commands::letters::run(&self.store)
    }

    pub fn facets(&self) -> CmdResult {
        commands::facets::run(&self.store)
    }

    pub fn icon_resolver(&self) -> IconResolver {
        IconResolver::new(self.paths.icon_dir.clone())
    }

    pub fn store(&self) -> &WordStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &LexiconPaths {
        &self.paths
    }
}

pub use commands::{CmdMessage, CmdResult, EntryUpdate, EntryView, MessageLevel, PageInfo};
