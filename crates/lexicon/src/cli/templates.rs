//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/`, embedded here as string constants.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks`, so a line
//! holding only a block tag produces no output. A content line must not end
//! in a block tag, or its newline is trimmed with it; compute optional
//! suffixes in Rust instead.
//!
//! Styles are applied with the `style` filter: `{{ entry.word|style("word") }}`.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const ENTRY_TEMPLATE: &str = include_str!("templates/entry.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const FACETS_TEMPLATE: &str = include_str!("templates/facets.jinja");
pub const LETTERS_TEMPLATE: &str = include_str!("templates/letters.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
