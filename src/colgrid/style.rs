//! Named styles and template rendering.
//!
//! Templates refer to styles by semantic name (`{{ title | style("section") }}`); a
//! [`Theme`] maps those names to `console::Style` values. When colours are off the
//! filter returns the text unchanged, so the same template serves terminals and pipes.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Prefix shown in place of styling when a template names an unknown style.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A registry of named styles.
///
/// ```rust
/// use colgrid::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("title", Style::new().bold());
/// assert_eq!(styles.apply_plain("title", "Arrays"), "Arrays");
/// assert!(styles.apply("tilte", "Arrays").starts_with("(!?)"));
/// ```
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style, emitting ANSI codes whether or not stdout is a terminal.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => self.mark_missing(text),
        }
    }

    /// Checks the style name but leaves the text unstyled.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.mark_missing(text)
        }
    }

    fn mark_missing(&self, text: &str) -> String {
        format!("{} {}", DEFAULT_MISSING_STYLE_INDICATOR, text)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Whether stdout is a terminal that understands colour escapes.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// A set of named templates sharing one theme.
///
/// Block tags swallow their own line (`trim_blocks` and `lstrip_blocks`), so a
/// template line holding only `{% for %}` produces no output of its own and every
/// emitted newline is visible in the template source.
///
/// ```rust
/// use colgrid::{Renderer, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Names { names: Vec<&'static str> }
///
/// let mut renderer = Renderer::with_color(Theme::new().add("name", Style::new().cyan()), false);
/// renderer
///     .add_template("names", "{% for n in names %}\n{{ n | style(\"name\") }}\n{% endfor %}\n")
///     .unwrap();
/// let out = renderer.render("names", &Names { names: vec!["sin", "cos"] }).unwrap();
/// assert_eq!(out, "sin\ncos\n");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer that styles output only when stdout supports colour.
    pub fn new(theme: Theme) -> Self {
        Self::with_color(theme, colors_supported())
    }

    /// Creates a renderer with colour explicitly on or off.
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        let styles = theme.styles;
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            if use_color {
                styles.apply(&name, &text)
            } else {
                styles.apply_plain(&name, &text)
            }
        });
        Self { env }
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template.
    ///
    /// # Errors
    ///
    /// Fails when the template is unknown or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((u16::from(r) - 8) * 24 / 247) as u8,
        };
    }
    let scale = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}
