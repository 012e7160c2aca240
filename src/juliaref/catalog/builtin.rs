use super::{topics, CatalogSource, Topic};
use once_cell::sync::Lazy;

static BUILTIN_TOPICS: Lazy<Vec<Topic>> = Lazy::new(topics::all);

/// The topics compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalog {
    fn topics(&self) -> &[Topic] {
        &BUILTIN_TOPICS
    }
}
