//! JSON export of the effective view.
//!
//! The output is the same entry shape the store persists, so an export can be
//! dropped in as a new `data/words.json`.

use crate::error::{LexiconError, Result};
use crate::model::Entry;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

pub fn to_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries).map_err(LexiconError::Serialization)
}

/// Timestamped export file name, e.g. `lexicon-2024-01-15_14-30-00.json`.
pub fn export_filename() -> String {
    format!("lexicon-{}.json", Utc::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes `entries` to `target`. A directory target gets a timestamped file
/// inside it; anything else is used as the file path.
pub fn write_export(entries: &[Entry], target: &Path) -> Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(export_filename())
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(LexiconError::Io)?;
        }
    }
    fs::write(&path, to_json(entries)?).map_err(LexiconError::Io)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_dataset;
    use crate::model::Icon;
    use tempfile::tempdir;

    #[test]
    fn export_reads_back_as_dataset() {
        let entries = vec![
            Entry::new("Ama").with_id("Ama").with_tags(["core"]),
            Entry::new("Zeta")
                .with_id("local-1")
                .with_icon(Icon::FileRef("z.svg".into())),
        ];
        let json = to_json(&entries).unwrap();
        assert_eq!(parse_dataset(&json).unwrap(), entries);
    }

    #[test]
    fn directory_target_gets_timestamped_name() {
        let dir = tempdir().unwrap();
        let path = write_export(&[Entry::new("Ama").with_id("Ama")], dir.path()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("lexicon-"));
        assert!(name.ends_with(".json"));
        assert!(path.exists());
    }

    #[test]
    fn file_target_is_used_verbatim() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out/words.json");
        let path = write_export(&[], &target).unwrap();
        assert_eq!(path, target);
        assert_eq!(fs::read_to_string(target).unwrap(), "[]");
    }
}
