//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal text.
//!
//! Layout stays in Rust: each label list is handed to [`colgrid::layout`] with the
//! resolved width and the template receives finished rows. Templates pick styles for
//! titles and messages and decide where blank lines go. Rows themselves are printed
//! plain, so what the grid measured is exactly what reaches the terminal.

use super::styles::{names, JULIAREF_THEME};
use super::templates;
use colgrid::{display_width, Renderer};
use juliaref::api::{CmdMessage, MessageLevel};
use juliaref::catalog::{Section, SectionBody, Topic};
use juliaref::config::{JuliarefConfig, CONFIG_KEYS};
use juliaref::error::{JuliarefError, Result};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// Gap between the longest topic key and the titles in the topic list.
const KEY_GAP: usize = 2;

/// Printed in place of a grid when a list has no names.
const EMPTY_MARKER: &str = "(none)";

#[derive(Serialize)]
struct TopicLine {
    key: String,
    gap: String,
    title: String,
}

#[derive(Serialize)]
struct TopicsData {
    topics: Vec<TopicLine>,
}

/// One grid, with an optional subsection title above it.
#[derive(Serialize)]
struct GroupView {
    title: Option<String>,
    rows: Vec<String>,
    empty: bool,
}

#[derive(Serialize)]
struct SectionView {
    title: String,
    groups: Vec<GroupView>,
}

#[derive(Serialize)]
struct TopicData {
    title: String,
    doc: Option<String>,
    sections: Vec<SectionView>,
    empty_marker: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Renders everything the CLI prints, at one width and colour setting.
pub struct Output {
    renderer: Renderer,
    width: usize,
}

impl Output {
    pub fn new(width: usize, use_color: bool) -> Result<Self> {
        let mut renderer = Renderer::with_color(JULIAREF_THEME.clone(), use_color);
        for (name, source) in templates::ALL {
            renderer
                .add_template(name, source)
                .map_err(render_error)?;
        }
        Ok(Self { renderer, width })
    }

    pub fn topics(&self, topics: &[Topic]) -> Result<String> {
        let key_width = topics
            .iter()
            .map(|t| display_width(&t.key))
            .max()
            .unwrap_or(0);
        let lines = topics
            .iter()
            .map(|t| TopicLine {
                key: t.key.clone(),
                gap: " ".repeat(key_width - display_width(&t.key) + KEY_GAP),
                title: t.title.clone(),
            })
            .collect();
        self.render("topics", &TopicsData { topics: lines })
    }

    /// Renders a topic: title, doc text unless `names_only`, then each section.
    pub fn topic(&self, topic: &Topic, names_only: bool) -> Result<String> {
        let sections = topic
            .sections
            .iter()
            .map(|s| self.section_view(s))
            .collect::<Result<Vec<_>>>()?;
        let doc = (!names_only && !topic.doc.is_empty()).then(|| topic.doc.clone());
        let data = TopicData {
            title: topic.title.clone(),
            doc,
            sections,
            empty_marker: EMPTY_MARKER,
        };
        self.render("topic", &data)
    }

    /// Lays out free labels as one unstyled grid.
    pub fn grid(&self, labels: &[String]) -> Result<String> {
        let grid = colgrid::layout(labels, self.width)?;
        Ok(grid.to_string())
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let messages = messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }

    pub fn config(&self, config: &JuliarefConfig) -> Result<String> {
        let entries = CONFIG_KEYS
            .iter()
            .map(|&key| {
                Ok(ConfigEntry {
                    key,
                    value: config.get(key)?,
                })
            })
            .collect::<Result<_>>()?;
        self.render("config", &ConfigData { entries })
    }

    fn section_view(&self, section: &Section) -> Result<SectionView> {
        let mut groups = match &section.body {
            SectionBody::Flat(labels) => vec![self.group_view(None, labels)?],
            SectionBody::Nested(subsections) => subsections
                .iter()
                .map(|s| self.group_view(Some(&s.title), &s.labels))
                .collect::<Result<_>>()?,
        };
        if groups.is_empty() {
            groups.push(self.group_view(None, &[])?);
        }
        Ok(SectionView {
            title: section.title().to_string(),
            groups,
        })
    }

    fn group_view(&self, title: Option<&str>, labels: &[String]) -> Result<GroupView> {
        let title = title.map(str::to_string);
        if labels.is_empty() {
            return Ok(GroupView {
                title,
                rows: Vec::new(),
                empty: true,
            });
        }

        let grid = colgrid::layout(labels, self.width)?;
        debug!(
            labels = labels.len(),
            columns = grid.columns(),
            rows = grid.rows(),
            "section grid"
        );
        Ok(GroupView {
            title,
            rows: grid.render(),
            empty: false,
        })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.renderer.render(name, data).map_err(render_error)
    }
}

fn render_error<E: Display>(e: E) -> JuliarefError {
    JuliarefError::Render(e.to_string())
}
