//! # Catalog
//!
//! The catalog is the static reference table behind every listing: a set of
//! [`Topic`]s, each carrying a long-form explanation and the built-in names related
//! to it, grouped into [`Section`]s by [`Category`].
//!
//! Names are never discovered at runtime. Everything comes from a pre-built table,
//! either the one compiled into the binary or one read back from a category dump
//! file.
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinCatalog`]: the compiled-in topics, built once on first use
//! - [`file::FileCatalog`]: a single topic read from a `# <Category>` dump file
//!
//! ## Ordering
//!
//! Order is significant everywhere. Labels keep the order they were declared in
//! (it decides their position in the printed grid), subsections keep insertion
//! order, and duplicates are kept as given.

use crate::error::{JuliarefError, Result};
use std::fmt;
use std::str::FromStr;

pub mod builtin;
pub mod file;
mod topics;

/// The kind of binding a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Constants,
    Macros,
    Methods,
    Modules,
    Operators,
    Types,
}

impl Category {
    /// All categories, in dump file order.
    pub const ALL: [Category; 6] = [
        Category::Constants,
        Category::Macros,
        Category::Methods,
        Category::Modules,
        Category::Operators,
        Category::Types,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Constants => "Constants",
            Category::Macros => "Macros",
            Category::Methods => "Methods",
            Category::Modules => "Modules",
            Category::Operators => "Operators",
            Category::Types => "Types",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = JuliarefError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JuliarefError::UnknownCategory(wanted.to_string()))
    }
}

/// A titled group of names inside a nested section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub title: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Flat(Vec<String>),
    Nested(Vec<Subsection>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub body: SectionBody,
}

impl Section {
    pub fn flat(category: Category, labels: &[&str]) -> Self {
        Self {
            category,
            body: SectionBody::Flat(to_owned(labels)),
        }
    }

    pub fn nested(category: Category, groups: &[(&str, &[&str])]) -> Self {
        let subsections = groups
            .iter()
            .map(|(title, labels)| Subsection {
                title: title.to_string(),
                labels: to_owned(labels),
            })
            .collect();
        Self {
            category,
            body: SectionBody::Nested(subsections),
        }
    }

    pub fn title(&self) -> &'static str {
        self.category.name()
    }

    /// All names in the section, subsections flattened in order.
    pub fn labels(&self) -> Vec<&str> {
        match &self.body {
            SectionBody::Flat(labels) => labels.iter().map(String::as_str).collect(),
            SectionBody::Nested(groups) => groups
                .iter()
                .flat_map(|g| g.labels.iter().map(String::as_str))
                .collect(),
        }
    }
}

fn to_owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

/// One reference topic: an explanation plus its related names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub key: String,
    pub title: String,
    pub doc: String,
    pub aliases: Vec<String>,
    pub sections: Vec<Section>,
}

impl Topic {
    pub fn new(key: &str, title: &str, doc: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            doc: doc.trim().to_string(),
            aliases: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = to_owned(aliases);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Whether `name` refers to this topic, by key or alias, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.trim();
        self.key.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }
}

/// Abstract access to a set of topics.
pub trait CatalogSource {
    /// All topics, in display order.
    fn topics(&self) -> &[Topic];

    /// Looks a topic up by key or alias.
    fn topic(&self, name: &str) -> Result<&Topic> {
        self.topics()
            .iter()
            .find(|t| t.answers_to(name))
            .ok_or_else(|| JuliarefError::UnknownTopic(name.to_string()))
    }
}
