//! # Category Dump Files
//!
//! A plain text rendering of the catalog, grouped by category rather than by topic.
//! It is meant for grepping, diffing between releases and regenerating tables:
//!
//! ```text
//! # Constants
//! Inf
//! NaN
//!
//! # Macros
//! @r_str
//! ```
//!
//! Categories are written in [`Category::ALL`] order and only when they hold at
//! least one name. Names from nested subsections are flattened, and a name
//! repeated within one category (the same function listed under two topics) is
//! written once, at its first occurrence.
//!
//! Reading accepts the same shape: blank lines are skipped, a `# <Category>` line
//! switches category and every other line is one name. A file read back becomes a
//! single topic named after the file.

use super::{CatalogSource, Category, Section, Topic};
use crate::error::{JuliarefError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Names of `topics` grouped by category, deduplicated, in dump order.
pub fn group_by_category(topics: &[&Topic]) -> Vec<(Category, Vec<String>)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let mut seen = HashSet::new();
            let names: Vec<String> = topics
                .iter()
                .filter_map(|t| t.section(category))
                .flat_map(|s| s.labels())
                .filter(|name| seen.insert(*name))
                .map(str::to_string)
                .collect();
            (!names.is_empty()).then_some((category, names))
        })
        .collect()
}

/// Writes the dump for `topics` and returns the number of names written.
pub fn write_dump<W: Write>(topics: &[&Topic], out: &mut W) -> Result<usize> {
    let mut written = 0;
    for (i, (category, names)) in group_by_category(topics).iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "# {}", category)?;
        for name in names {
            writeln!(out, "{}", name)?;
        }
        written += names.len();
    }
    Ok(written)
}

/// Parses dump text into one flat section per category, in first-seen order.
pub fn parse_dump(input: &str) -> Result<Vec<Section>> {
    let mut sections: Vec<(Category, Vec<&str>)> = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('#') {
            let category: Category = header.parse()?;
            let slot = match sections.iter().position(|(c, _)| *c == category) {
                Some(slot) => slot,
                None => {
                    sections.push((category, Vec::new()));
                    sections.len() - 1
                }
            };
            current = Some(slot);
            continue;
        }

        match current {
            Some(slot) => sections[slot].1.push(line),
            None => {
                return Err(JuliarefError::Parse {
                    line: idx + 1,
                    message: format!("`{}` appears before any `# <Category>` header", line),
                })
            }
        }
    }

    Ok(sections
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(category, names)| Section::flat(category, &names))
        .collect())
}

/// A catalog holding the single topic read from a dump file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    topics: Vec<Topic>,
}

impl FileCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dump")
            .to_string();
        debug!(path = %path.display(), "loading category dump");

        let doc = format!("Names loaded from {}.", path.display());
        Self::parse(&key, &doc, &content)
    }

    pub fn parse(key: &str, doc: &str, content: &str) -> Result<Self> {
        let topic = parse_dump(content)?
            .into_iter()
            .fold(Topic::new(key, key, doc), Topic::with_section);
        Ok(Self {
            topics: vec![topic],
        })
    }

    /// The loaded topic.
    pub fn topic_ref(&self) -> &Topic {
        &self.topics[0]
    }
}

impl CatalogSource for FileCatalog {
    fn topics(&self) -> &[Topic] {
        &self.topics
    }
}
