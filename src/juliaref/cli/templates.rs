//! # CLI Templates
//!
//! Output templates are stand-alone files under `templates/`, embedded here as string
//! constants. They are minijinja templates rendered through `colgrid::Renderer`.
//!
//! Block tags swallow their own line, so every newline in the output comes from a
//! line holding text or an expression. A blank line in a template between block tags
//! is a blank line in the output.
//!
//! Templates stay dumb: grids arrive as finished rows, empty sections arrive flagged,
//! and style names are resolved in Rust where they depend on data (message levels).

pub const TOPICS_TEMPLATE: &str = include_str!("templates/topics.tmp");
pub const TOPIC_TEMPLATE: &str = include_str!("templates/topic.tmp");
pub const SECTION_TEMPLATE: &str = include_str!("templates/section.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");

/// Registration names paired with sources.
pub const ALL: [(&str, &str); 5] = [
    ("topics", TOPICS_TEMPLATE),
    ("topic", TOPIC_TEMPLATE),
    ("section", SECTION_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
];
