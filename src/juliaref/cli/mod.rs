//! # CLI Behavior
//!
//! This is one UI client for juliaref. It is the only place that knows about terminal
//! I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `juliaref` with no subcommand lists the topics, same as `juliaref topics`.
//!
//! ## Width
//!
//! Grids are packed to a display width picked in this order:
//!
//! 1. `--width N`
//! 2. the width of the terminal on stdout
//! 3. `default-width` from the config file (80 unless changed)
//!
//! A width of 0 is passed through and rejected by the layout, like any other caller
//! would see it.
//!
//! ## Colour
//!
//! `--no-color` wins, then the `color` config key (`auto`, `always`, `never`). With
//! `auto`, styles are applied only when stdout is a colour-capable terminal.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch and per-command handlers
//! - `render`: lays out grids and fills templates
//! - `setup`: argument parsing via clap
//! - `styles`: the theme
//! - `templates`: embedded template sources

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
