use super::backend::StorageBackend;
use crate::error::{LexiconError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since lexicon is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write and remove fail, like a browser storage that is full
    /// or disabled.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to seed a raw value, bypassing the write error switch.
    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(LexiconError::Persistence(
                "Simulated quota exceeded".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_key_is_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("nope").unwrap(), None);
    }

    #[test]
    fn write_then_remove() {
        let backend = MemBackend::new();
        backend.write("k", "[1]").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("[1]"));
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }

    #[test]
    fn simulated_error_blocks_writes_but_not_reads() {
        let backend = MemBackend::new();
        backend.seed("k", "[]");
        backend.set_simulate_write_error(true);
        assert!(matches!(
            backend.write("k", "[1]"),
            Err(LexiconError::Persistence(_))
        ));
        assert!(backend.remove("k").is_err());
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("[]"));
    }
}
