//! # Lexicon CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/lexiconapp/`: UI-agnostic library (word store, query engine,
//!   commands, API facade)
//! - `crates/lexicon/`: This terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/lexicon/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - minijinja templates + console styles (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/lexiconapp/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/lexiconapp/src/commands/*)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI layer owns every user-facing concern: argument parsing, logging
//! setup, rendering, and exit codes.
//!
//! ## Rendering
//!
//! Templates live in `src/cli/templates/` and are embedded at compile time via
//! `include_str!()`. Layout math (column widths, truncation) stays in Rust;
//! templates pick styles through a `style` filter. `--output json` bypasses
//! templates and prints the command result as JSON.
//!
//! ## Testing Approach
//!
//! - **Command layer**: heavy unit testing in `lexiconapp`.
//! - **Rendering**: canned `CmdResult` values rendered without color.
//! - **End to end**: `tests/cli_e2e.rs` runs the binary against a temporary
//!   word list and state directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
