use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Could not load word list (tried {})", display_paths(.tried))]
    DataLoad { tried: Vec<PathBuf> },

    #[error("Word list is not a JSON array: {0}")]
    DataFormat(String),

    #[error("Could not save to storage: {0}")]
    Persistence(String),

    #[error("Icon unavailable for \"{word}\": {reason}")]
    IconResolution { word: String, reason: String },

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no paths".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LexiconError>;
