//! Styles for the lexicon CLI.
//!
//! Templates never name colors. They name what a piece of text *is* (`word`,
//! `pos`, `favorite`) and the `style` filter looks that name up here. Changing
//! the look of the CLI is a change to this table only.
//!
//! Colors are written with `console` styles and honour `NO_COLOR` and non-tty
//! stdout through [`console::colors_enabled`].

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TIME: &str = "time";
    pub const INDEX: &str = "index";
    pub const WORD: &str = "word";
    pub const POS: &str = "pos";
    pub const TAG: &str = "tag";
    pub const ICON: &str = "icon";
    pub const FAVORITE: &str = "favorite";
    pub const LOCAL: &str = "local";
    pub const HEADING: &str = "heading";
    pub const LETTER: &str = "letter";
}

static THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(build_theme);

fn build_theme() -> HashMap<&'static str, Style> {
    let regular = Style::new();
    let muted = Style::new().color256(245);
    let faint = Style::new().color256(240);
    let accent = Style::new().color256(178);

    HashMap::from([
        (names::REGULAR, regular.clone()),
        (names::MUTED, muted.clone()),
        (names::FAINT, faint),
        (names::ERROR, Style::new().red().bold()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, muted.clone()),
        (names::TIME, muted.clone().italic()),
        (names::INDEX, accent.clone()),
        (names::WORD, regular.clone().bold()),
        (names::POS, muted.clone().italic()),
        (names::TAG, Style::new().cyan()),
        (names::ICON, accent.clone()),
        (names::FAVORITE, accent.bold()),
        (names::LOCAL, Style::new().color256(110)),
        (names::HEADING, regular.bold().underlined()),
        (names::LETTER, Style::new().cyan().bold()),
    ])
}

/// Looks a style up by name. Unknown names render unstyled.
pub fn style(name: &str) -> Style {
    THEME.get(name).cloned().unwrap_or_else(Style::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_apply_when_forced() {
        let styled = style(names::ERROR)
            .force_styling(true)
            .apply_to("boom")
            .to_string();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn unknown_name_is_plain() {
        let plain = style("nope").force_styling(true).apply_to("x").to_string();
        assert_eq!(plain, "x");
    }
}
