//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry point
//! for every juliaref operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (category names are parsed here, not in the CLI)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and no layout. Grids are computed by the UI, which is the
//! only layer that knows the display width.
//!
//! ## Generic Over CatalogSource
//!
//! `JuliarefApi<S: CatalogSource>` runs the same commands against the compiled-in
//! topics (`BuiltinCatalog`) or a topic read from a dump file (`FileCatalog`).

use crate::catalog::{CatalogSource, Category};
use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct JuliarefApi<S: CatalogSource> {
    source: S,
    config_dir: PathBuf,
}

impl<S: CatalogSource> JuliarefApi<S> {
    pub fn new(source: S, config_dir: PathBuf) -> Self {
        Self { source, config_dir }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn topics(&self) -> Result<CmdResult> {
        commands::topics::run(&self.source)
    }

    pub fn show(&self, name: &str, category: Option<&str>) -> Result<CmdResult> {
        let category = category.map(str::parse::<Category>).transpose()?;
        commands::show::run(&self.source, name, category)
    }

    pub fn grid(&self, input: &str) -> Result<CmdResult> {
        commands::grid::run(input)
    }

    pub fn dump<I: AsRef<str>>(&self, names: &[I], output: Option<&Path>) -> Result<CmdResult> {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        commands::dump::run(&self.source, &names, output)
    }

    pub fn config(&self, key: Option<String>, value: Option<String>) -> Result<CmdResult> {
        let action = match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(key), None) => ConfigAction::ShowKey(key),
            (Some(key), Some(value)) => ConfigAction::Set(key, value),
        };
        commands::config::run(&self.config_dir, action)
    }
}
