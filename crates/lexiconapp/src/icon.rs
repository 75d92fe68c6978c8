//! Icon resolution for display.
//!
//! Clients call [`IconResolver::resolve`] per entry. A failure only affects
//! that one entry: it falls back to the word's first character, or to
//! [`PLACEHOLDER`] when there is none.

use crate::error::{LexiconError, Result};
use crate::model::{Entry, Icon};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const PLACEHOLDER: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIcon {
    Markup(String),
    Glyph(char),
}

impl ResolvedIcon {
    /// A single character suitable for terminal display. Markup cannot be
    /// drawn in a terminal, so it shows as the word's initial.
    pub fn as_glyph(&self, word: &str) -> char {
        match self {
            ResolvedIcon::Glyph(c) => *c,
            ResolvedIcon::Markup(_) => fallback_glyph(word),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IconResolver {
    icon_dir: PathBuf,
}

impl IconResolver {
    pub fn new(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
        }
    }

    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }

    /// Resolves an entry's icon, falling back to a glyph on any failure.
    pub fn resolve(&self, entry: &Entry) -> ResolvedIcon {
        match self.try_resolve(entry) {
            Ok(icon) => icon,
            Err(e) => {
                debug!(error = %e, "using fallback icon");
                ResolvedIcon::Glyph(fallback_glyph(&entry.word))
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but reports why a file icon could not
    /// be read.
    pub fn try_resolve(&self, entry: &Entry) -> Result<ResolvedIcon> {
        match &entry.icon {
            Icon::None => Ok(ResolvedIcon::Glyph(fallback_glyph(&entry.word))),
            Icon::Inline(markup) => Ok(ResolvedIcon::Markup(markup.clone())),
            Icon::Glyph(c) => Ok(ResolvedIcon::Glyph(*c)),
            Icon::FileRef(name) => {
                let path = self.file_path(name).ok_or_else(|| LexiconError::IconResolution {
                    word: entry.word.clone(),
                    reason: format!("\"{}\" is not a plain file name", name),
                })?;
                let content =
                    fs::read_to_string(&path).map_err(|e| LexiconError::IconResolution {
                        word: entry.word.clone(),
                        reason: format!("{}: {}", path.display(), e),
                    })?;
                Ok(ResolvedIcon::Markup(content))
            }
        }
    }

    fn file_path(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.icon_dir.join(file)),
            _ => None,
        }
    }
}

pub fn fallback_glyph(word: &str) -> char {
    word.chars().next().unwrap_or(PLACEHOLDER)
}
