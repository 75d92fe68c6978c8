//! # Storage Layer
//!
//! This module owns the word collection and its persistence.
//!
//! ## Two Layers, One View
//!
//! ```text
//!   remote (read-only, replaced on reload)
//!      +
//!   overrides (local upserts and delete markers, persisted)
//!      =
//!   effective (what queries run against, rebuilt on every mutation)
//! ```
//!
//! The effective view keeps remote order. A remote entry whose id has an
//! upsert override is shown as the override; one with a delete marker is
//! hidden. Upserts with no remote counterpart are appended in the order they
//! were first added.
//!
//! ## Persistence Contract
//!
//! Two keys, both JSON arrays (see [`StorageKeys`]):
//!
//! | Key                    | Value                                        |
//! |------------------------|----------------------------------------------|
//! | `<ns>.favorites`       | `["Ama", "Biru"]`                            |
//! | `<ns>.overrides`       | `[{"op":"upsert","entry":{…},…}, {"op":"delete","id":"Ama",…}]` |
//!
//! The remote list itself is never written back.
//!
//! ## Failure Semantics
//!
//! Mutations apply in memory first, then attempt the write. A failed write is
//! logged and returned as [`PersistStatus::Failed`]; the caller decides how to
//! surface it. Nothing is retried and nothing is rolled back.
//!
//! ## Implementations
//!
//! - [`fs::FileWordStore`]: Production store over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryWordStore`]: For testing logic without filesystem I/O.

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod word_store;

pub use backend::StorageBackend;
pub use word_store::{PersistStatus, StorageKeys, WordStore, DEFAULT_NAMESPACE};
