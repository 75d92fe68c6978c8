//! Reading the remote word list.
//!
//! The list is a JSON array at one of several well-known relative paths. They
//! are tried in order and the first one that can be read wins. Errors here are
//! for the caller to degrade (see [`crate::commands::load`]); the store itself
//! never sees a failed load, only an empty one.

use crate::error::{LexiconError, Result};
use crate::model::Entry;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn default_candidates() -> Vec<String> {
    vec!["data/words.json".to_string(), "Data/words.json".to_string()]
}

/// Parses a word list payload. Invalid JSON and non-array payloads are
/// [`LexiconError::DataFormat`]; records without a word are skipped.
pub fn parse_dataset(payload: &str) -> Result<Vec<Entry>> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| LexiconError::DataFormat(e.to_string()))?;
    let items = value.as_array().ok_or_else(|| {
        LexiconError::DataFormat(format!("expected an array, found {}", kind_of(&value)))
    })?;
    let entries: Vec<Entry> = items.iter().filter_map(Entry::from_value).collect();
    if entries.len() < items.len() {
        debug!(
            skipped = items.len() - entries.len(),
            "skipped word list records without a word"
        );
    }
    Ok(entries)
}

/// Tries each candidate path under `base` in order and parses the first one
/// that can be read.
pub fn load_dataset<S: AsRef<str>>(base: &Path, candidates: &[S]) -> Result<Vec<Entry>> {
    let mut tried = Vec::new();
    for candidate in candidates {
        let path = resolve(base, candidate.as_ref());
        match fs::read_to_string(&path) {
            Ok(payload) => {
                let entries = parse_dataset(&payload)?;
                info!(path = %path.display(), count = entries.len(), "loaded word list");
                return Ok(entries);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "word list not found, trying next");
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "word list unreadable, trying next");
            }
        }
        tried.push(path);
    }
    Err(LexiconError::DataLoad { tried })
}

fn resolve(base: &Path, candidate: &str) -> PathBuf {
    let path = Path::new(candidate);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
