//! # Juliaref Architecture
//!
//! Juliaref is a set of reference cards for the Julia language: twelve topics, each a
//! short explanation plus the built-in names related to it, grouped by category. The
//! names are printed packed into terminal-width column grids by the `colgrid` crate.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves width and colour              │
//! │  - Lays out grids and renders templates                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses category names                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Looks topics up, writes dumps, edits config              │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog/)                                         │
//! │  - CatalogSource trait                                      │
//! │  - BuiltinCatalog (compiled in), FileCatalog (dump files)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Static Names
//!
//! Nothing here asks a Julia installation what it exports. Every name comes from a
//! table written in `catalog/topics/`, kept in the order it should print in. That
//! order is part of the data: the grid fills column by column, so reordering a list
//! moves names across columns.
//!
//! ## Testing Strategy
//!
//! - **Catalog and commands**: unit tests next to the code, against `BuiltinCatalog`
//!   or small `FileCatalog`s parsed from strings.
//! - **API**: checks that arguments reach the right command.
//! - **CLI**: rendering tests feed canned topics through the templates with colour
//!   off; `tests/cli.rs` drives the built binary.
//! - **Layout**: `colgrid` carries its own unit and property tests.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
