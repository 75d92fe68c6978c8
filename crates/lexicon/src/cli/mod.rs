//! # CLI Behavior
//!
//! This is **one possible UI client** for lexicon, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ### Naked Execution (`lexicon`)
//!
//! Running `lexicon` with no arguments lists the first page of words, the same
//! as `lexicon search`.
//!
//! ### Paging
//!
//! Pages are 1-based on the command line (`--page 2`). "Load more" is simply
//! asking for the next page; the footer says which one that is.
//!
//! ### Degraded Start
//!
//! A missing or malformed word list is a warning, not an error. Local entries
//! remain searchable and editable.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and dispatch to the API
//! - `logging`: tracing subscriber setup
//! - `render`: Template rendering and layout
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Embedded templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
