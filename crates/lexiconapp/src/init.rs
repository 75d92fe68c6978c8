//! # Context Wiring
//!
//! [`initialize`] is what a client calls once at startup. It decides where
//! state lives, loads configuration, opens the file-backed store and loads the
//! word list.
//!
//! ## State Directory
//!
//! Favorites, overrides and the user config file live in one directory:
//!
//! 1. `LEXICON_STATE_DIR`, if set. Tests use this to isolate state.
//! 2. The OS data directory (via the `directories` crate).
//! 3. `<cwd>/.lexicon` when the OS gives no home to work from.
//!
//! ## Word List
//!
//! Word list candidates are resolved against the working directory. An
//! explicit `dataset_override` replaces the configured candidates. Loading
//! never fails; the outcome is reported in [`LexiconContext::messages`].

use crate::api::{LexiconApi, LexiconPaths};
use crate::commands::CmdMessage;
use crate::config::LexiconConfig;
use crate::store::fs::FileWordStore;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STATE_DIR_ENV: &str = "LEXICON_STATE_DIR";

pub struct LexiconContext {
    pub api: LexiconApi<FsBackend>,
    pub config: LexiconConfig,
    /// Messages from loading the word list.
    pub messages: Vec<CmdMessage>,
}

/// Resolves the directory persistent state lives in.
pub fn state_dir(cwd: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(STATE_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "lexicon", "lexicon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".lexicon"))
}

/// Builds the lexicon context for a client.
///
/// # Arguments
///
/// * `cwd` - The working directory; word list paths and `icon_dir` are
///   relative to it
/// * `dataset_override` - Optional word list file used instead of the
///   configured candidates
pub fn initialize(cwd: &Path, dataset_override: Option<PathBuf>) -> LexiconContext {
    let state_dir = state_dir(cwd);
    debug!(state_dir = %state_dir.display(), "resolved state directory");
    initialize_in(cwd, state_dir, dataset_override)
}

/// Like [`initialize`], with the state directory given explicitly.
pub fn initialize_in(
    cwd: &Path,
    state_dir: PathBuf,
    dataset_override: Option<PathBuf>,
) -> LexiconContext {
    let config = LexiconConfig::load(cwd, &state_dir);
    let candidates: Vec<String> = match dataset_override {
        Some(path) => vec![path.to_string_lossy().into_owned()],
        None => config.data_paths.clone(),
    };

    let store = FileWordStore::new_fs(state_dir.clone(), &config.storage_namespace);
    let paths = LexiconPaths {
        state_dir,
        dataset_base: cwd.to_path_buf(),
        icon_dir: cwd.join(&config.icon_dir),
    };
    let mut api = LexiconApi::new(store, paths);
    let loaded = api.load_words(&candidates);

    LexiconContext {
        api,
        config,
        messages: loaded.messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Entry;
    use std::fs;
    use tempfile::tempdir;

    fn write_words(dir: &Path, rel: &str, payload: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, payload).unwrap();
    }

    #[test]
    fn initialize_loads_words_and_state() {
        let cwd = tempdir().unwrap();
        let state = tempdir().unwrap();
        write_words(cwd.path(), "data/words.json", r#"[{"word":"Ama"}]"#);

        let mut ctx = initialize_in(cwd.path(), state.path().to_path_buf(), None);
        assert_eq!(ctx.api.store().effective().len(), 1);
        assert_eq!(ctx.messages[0].level, MessageLevel::Info);

        ctx.api.add_entry(Entry::new("Zeta")).unwrap();
        let reopened = initialize_in(cwd.path(), state.path().to_path_buf(), None);
        assert!(reopened.api.store().find("Zeta").is_some());
    }

    #[test]
    fn dataset_override_replaces_candidates() {
        let cwd = tempdir().unwrap();
        let state = tempdir().unwrap();
        write_words(cwd.path(), "data/words.json", r#"[{"word":"Ama"}]"#);
        write_words(cwd.path(), "alt/list.json", r#"[{"word":"Biru"},{"word":"Cela"}]"#);

        let ctx = initialize_in(
            cwd.path(),
            state.path().to_path_buf(),
            Some(PathBuf::from("alt/list.json")),
        );
        assert_eq!(ctx.api.store().effective().len(), 2);
    }

    #[test]
    fn config_namespace_and_icon_dir_apply() {
        let cwd = tempdir().unwrap();
        let state = tempdir().unwrap();
        fs::write(
            cwd.path().join(crate::config::CONFIG_FILE),
            "storage_namespace = \"alt\"\nicon_dir = \"art\"\n",
        )
        .unwrap();

        let ctx = initialize_in(cwd.path(), state.path().to_path_buf(), None);
        assert_eq!(ctx.api.store().keys().favorites, "alt.favorites");
        assert_eq!(ctx.api.paths().icon_dir, cwd.path().join("art"));
        assert_eq!(ctx.messages[0].level, MessageLevel::Warning);
    }
}
