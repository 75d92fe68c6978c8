//! # Lexicon Architecture
//!
//! Lexicon is a **UI-agnostic dictionary library**. The terminal client in
//! `crates/lexicon` is one consumer; a web view or a desktop shell could sit on
//! the same core without touching it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/lexicon: clap parsing, templates, stdout)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the backend      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  WordStore (store/)      │   │  QueryEngine (query.rs)      │
//! │  remote + overrides      │   │  filter → sort → paginate    │
//! │  favorites, persistence  │   │  pure, no I/O                │
//! └──────────────────────────┘   └──────────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StorageBackend: key/value strings (memory or files)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Effective View
//!
//! The remote dataset is read-only. Every local add, edit or delete lands in an
//! override layer keyed by entry id, and only that layer (plus favorites) is
//! persisted. The effective view is `remote` with overrides applied on top, and
//! it is recomputed after every mutation. Callers re-run their query after a
//! mutation; nothing is cached between queries.
//!
//! ## Failure Policy
//!
//! Nothing here is fatal to the process. A missing or malformed dataset
//! degrades to an empty collection plus a message. A rejected storage write is
//! logged and reported, but the in-memory mutation stands.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for clients
//! - [`commands`]: Business logic per operation
//! - [`store`]: Storage backends and the [`store::WordStore`]
//! - [`query`]: Filtering, ordering and paging
//! - [`model`]: [`model::Entry`], [`model::Icon`], [`model::Override`]
//! - [`loader`]: Reading the remote word list
//! - [`icon`]: Icon resolution with fallbacks
//! - [`export`]: JSON export of the effective view
//! - [`config`]: Layered configuration
//! - [`init`]: Context wiring for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod icon;
pub mod init;
pub mod loader;
pub mod model;
pub mod query;
pub mod store;
