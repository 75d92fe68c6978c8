//! # Rendering Module
//!
//! Styled terminal output from the templates in `templates/`.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware width handling. Templates handle
//! presentation: which style a piece of text gets and where lines break.
//!
//! Every public `render_*` function has an `_internal` twin taking an explicit
//! color flag, which tests use to get plain text.

use super::styles::{names, style};
use super::templates::{
    CONFIG_TEMPLATE, ENTRY_TEMPLATE, FACETS_TEMPLATE, LETTERS_TEMPLATE, LIST_TEMPLATE,
    MESSAGES_TEMPLATE,
};
use chrono::{DateTime, Utc};
use lexiconapp::api::{CmdMessage, EntryView, MessageLevel, PageInfo};
use lexiconapp::icon::IconResolver;
use minijinja::{Environment, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const MAX_WORD_WIDTH: usize = 22;
pub const MAX_POS_WIDTH: usize = 12;
pub const FAVORITE_MARKER: &str = "★";
pub const LOCAL_MARKER: &str = "✎";

#[derive(Serialize)]
struct ListLineData {
    index: String,
    fav: String,
    local: String,
    glyph: String,
    word: String,
    word_padding: String,
    pos: String,
    pos_padding: String,
    definition: String,
    edited: String,
}

#[derive(Serialize)]
struct ListData {
    lines: Vec<ListLineData>,
    footer: String,
}

#[derive(Serialize)]
struct EntryData {
    id: String,
    glyph: String,
    word: String,
    pos_suffix: String,
    fav_suffix: String,
    definition: String,
    usage: String,
    etymology: String,
    tags: String,
    related: String,
    edited: String,
}

#[derive(Serialize)]
struct EntriesData {
    entries: Vec<EntryData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TagData {
    name: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct FacetsData {
    tags: Vec<TagData>,
    parts_of_speech: Vec<String>,
}

#[derive(Serialize)]
struct LettersData {
    letters: Vec<String>,
}

#[derive(Serialize)]
struct ConfigItem {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    items: Vec<ConfigItem>,
}

fn render_template<S: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &S,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| {
        style(&name)
            .force_styling(use_color)
            .apply_to(value.to_string())
            .to_string()
    });
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

fn use_color() -> bool {
    console::colors_enabled()
}

/// Renders one page of search results.
pub fn render_list(views: &[EntryView], page: Option<&PageInfo>, icons: &IconResolver) -> String {
    render_list_internal(views, page, icons, use_color())
}

fn render_list_internal(
    views: &[EntryView],
    page: Option<&PageInfo>,
    icons: &IconResolver,
    use_color: bool,
) -> String {
    let first_index = page
        .map(|p| p.page_index.saturating_mul(p.page_size))
        .unwrap_or(0);
    let index_width = first_index.saturating_add(views.len()).to_string().len();
    let word_width = views
        .iter()
        .map(|v| v.entry.word.width())
        .max()
        .unwrap_or(0)
        .min(MAX_WORD_WIDTH);
    let pos_width = views
        .iter()
        .map(|v| v.entry.pos.width())
        .max()
        .unwrap_or(0)
        .min(MAX_POS_WIDTH);

    let lines = views
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let entry = &view.entry;
            let index = format!(
                "{:>width$}.",
                first_index.saturating_add(i + 1),
                width = index_width
            );
            let word = truncate_to_width(&entry.word, word_width);
            let pos = truncate_to_width(&entry.pos, pos_width);
            let edited = view
                .edited_at
                .map(|at| format!("  {}", format_time_ago(at)))
                .unwrap_or_default();

            // index, markers, glyph, word, pos, separators
            let fixed = index.width() + 1 + 2 + 1 + 2 + word_width + 2 + pos_width + 2;
            let available = LINE_WIDTH
                .saturating_sub(fixed)
                .saturating_sub(edited.width());

            ListLineData {
                index,
                fav: marker(view.is_favorite, FAVORITE_MARKER),
                local: marker(view.is_local, LOCAL_MARKER),
                glyph: icons.resolve(entry).as_glyph(&entry.word).to_string(),
                word_padding: " ".repeat(word_width.saturating_sub(word.width())),
                word,
                pos_padding: " ".repeat(pos_width.saturating_sub(pos.width())),
                pos,
                definition: truncate_to_width(first_line(&entry.definition), available),
                edited,
            }
        })
        .collect();

    let data = ListData {
        lines,
        footer: page.map(page_footer).unwrap_or_default(),
    };
    render_template("list", LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn page_footer(page: &PageInfo) -> String {
    if page.total == 0 {
        return String::new();
    }
    let noun = if page.total == 1 { "word" } else { "words" };
    let mut footer = format!(
        "Page {} of {} · {} {}",
        page.page_index.saturating_add(1),
        page.page_count.max(1),
        page.total,
        noun
    );
    if page.has_more {
        footer.push_str(&format!(
            " · more with --page {}",
            page.page_index.saturating_add(2)
        ));
    }
    footer
}

/// Renders full entries, as for `show`.
pub fn render_entries(views: &[EntryView], icons: &IconResolver) -> String {
    render_entries_internal(views, icons, use_color())
}

fn render_entries_internal(views: &[EntryView], icons: &IconResolver, use_color: bool) -> String {
    let entries = views
        .iter()
        .map(|view| {
            let entry = &view.entry;
            EntryData {
                id: if entry.id == entry.word {
                    String::new()
                } else {
                    entry.id.clone()
                },
                glyph: icons.resolve(entry).as_glyph(&entry.word).to_string(),
                word: entry.word.clone(),
                pos_suffix: if entry.pos.is_empty() {
                    String::new()
                } else {
                    format!("  {}", entry.pos)
                },
                fav_suffix: if view.is_favorite {
                    format!("  {}", FAVORITE_MARKER)
                } else {
                    String::new()
                },
                definition: entry.definition.clone(),
                usage: entry.usage.clone(),
                etymology: entry.etymology.clone(),
                tags: entry
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                related: entry.related.join(", "),
                edited: view
                    .edited_at
                    .map(|at| format!("{} edited locally {}", LOCAL_MARKER, format_time_ago(at)))
                    .unwrap_or_default(),
            }
        })
        .collect();

    render_template(
        "entry",
        ENTRY_TEMPLATE,
        &EntriesData { entries },
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };
    render_template("messages", MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_facets(tags: &BTreeMap<String, usize>, parts_of_speech: &[String]) -> String {
    render_facets_internal(tags, parts_of_speech, use_color())
}

fn render_facets_internal(
    tags: &BTreeMap<String, usize>,
    parts_of_speech: &[String],
    use_color: bool,
) -> String {
    let name_width = tags.keys().map(|t| t.width()).max().unwrap_or(0);
    let data = FacetsData {
        tags: tags
            .iter()
            .map(|(name, count)| TagData {
                name: name.clone(),
                padding: " ".repeat(name_width - name.width()),
                count: *count,
            })
            .collect(),
        parts_of_speech: parts_of_speech.to_vec(),
    };
    render_template("facets", FACETS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_letters(letters: &[char]) -> String {
    render_letters_internal(letters, use_color())
}

fn render_letters_internal(letters: &[char], use_color: bool) -> String {
    let data = LettersData {
        letters: letters.iter().map(|c| c.to_string()).collect(),
    };
    render_template("letters", LETTERS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders `key = value` pairs, values as JSON literals.
pub fn render_config(values: &[(String, serde_json::Value)]) -> String {
    render_config_internal(values, use_color())
}

fn render_config_internal(values: &[(String, serde_json::Value)], use_color: bool) -> String {
    let key_width = values.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = ConfigData {
        items: values
            .iter()
            .map(|(key, value)| ConfigItem {
                key: key.clone(),
                padding: " ".repeat(key_width - key.width()),
                value: value.to_string(),
            })
            .collect(),
    };
    render_template("config", CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn marker(on: bool, symbol: &str) -> String {
    if on {
        symbol.to_string()
    } else {
        " ".to_string()
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Cuts `text` to at most `width` columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
