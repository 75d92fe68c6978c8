use crate::error::Result;

/// Abstract interface for durable key/value storage.
///
/// This trait handles the "how" of storage (files vs memory), while
/// [`WordStore`](super::WordStore) handles the "what": which keys exist, how
/// values are encoded, and what a failed write means for the session.
///
/// Values are opaque strings. The store writes JSON arrays under two keys (see
/// [`StorageKeys`](super::StorageKeys)); nothing else crosses this boundary.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing was ever written (or it was removed).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: a reader sees either the old or the new value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
