//! # Configuration
//!
//! Lexicon configuration is a [`confique`] struct loaded in layers.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `LEXICON_PAGE_SIZE`, `LEXICON_ICON_DIR`,
//!    `LEXICON_NAMESPACE`.
//! 2. **Working directory**: `./lexicon.toml`, next to the word list.
//! 3. **State directory**: `<state dir>/lexicon.toml` (see [`crate::init`]).
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_paths` | `["data/words.json", "Data/words.json"]` | Word list locations, tried in order |
//! | `icon_dir` | `icons` | Directory holding file icons |
//! | `page_size` | `20` | Entries per page |
//! | `storage_namespace` | `lexicon` | Prefix of the storage keys |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "lexicon.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Word list locations relative to the working directory, tried in order.
    #[config(default = ["data/words.json", "Data/words.json"])]
    pub data_paths: Vec<String>,

    /// Directory holding file icons, relative to the working directory.
    #[config(default = "icons", env = "LEXICON_ICON_DIR")]
    pub icon_dir: String,

    /// Entries per page.
    #[config(default = 20, env = "LEXICON_PAGE_SIZE")]
    pub page_size: usize,

    /// Prefix for the favorites and overrides storage keys.
    #[config(default = "lexicon", env = "LEXICON_NAMESPACE")]
    pub storage_namespace: String,
}

impl Default for LexiconConfig {
    /// The `#[config(default = ...)]` values, with no file or env layer.
    fn default() -> Self {
        LexiconConfig::builder()
            .load()
            .expect("every LexiconConfig field declares a default")
    }
}

impl LexiconConfig {
    /// Loads the layered configuration. A broken file or env value is logged
    /// and the defaults are used instead.
    pub fn load(cwd: &Path, state_dir: &Path) -> Self {
        let loaded = LexiconConfig::builder()
            .env()
            .file(cwd.join(CONFIG_FILE))
            .file(state_dir.join(CONFIG_FILE))
            .load();
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
