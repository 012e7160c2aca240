//! The juliaref theme.
//!
//! Templates only use the semantic names below; the colours live here. Grid rows are
//! never styled since their padding is computed on plain text.

use colgrid::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TOPIC_TITLE: &str = "topic-title";
    pub const TOPIC_KEY: &str = "topic-key";
    pub const SECTION: &str = "section";
    pub const SUBSECTION: &str = "subsection";
    pub const MUTED: &str = "muted";
    pub const CONFIG_KEY: &str = "config-key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

const GREY: (u8, u8, u8) = (138, 138, 138);
const JULIA_PURPLE: (u8, u8, u8) = (149, 88, 178);

pub static JULIAREF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(
            names::TOPIC_TITLE,
            Style::new().color256(rgb_to_ansi256(JULIA_PURPLE)).bold(),
        )
        .add(names::TOPIC_KEY, Style::new().cyan())
        .add(names::SECTION, Style::new().bold().underlined())
        .add(names::SUBSECTION, Style::new().italic())
        .add(names::MUTED, Style::new().color256(rgb_to_ansi256(GREY)))
        .add(names::CONFIG_KEY, Style::new().cyan())
        .add(names::INFO, Style::new().color256(rgb_to_ansi256(GREY)))
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_is_registered() {
        let styles = JULIAREF_THEME.styles();
        for name in [
            names::TOPIC_TITLE,
            names::TOPIC_KEY,
            names::SECTION,
            names::SUBSECTION,
            names::MUTED,
            names::CONFIG_KEY,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
        ] {
            assert!(styles.has(name), "{}", name);
        }
    }
}
