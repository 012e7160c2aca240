//! # Colgrid - Column Grids and Styled Terminal Output
//!
//! A small toolkit for printing lists of short names to a terminal the way `ls` does:
//! packed into as many columns as the display width allows, filled top to bottom and
//! then left to right.
//!
//! ## The Problem
//!
//! Reference listings (function names, operators, type names) are long and narrow.
//! Printed one per line they scroll off screen; printed in a fixed number of columns
//! they either waste space or overflow narrow terminals.
//!
//! ## The Solution
//!
//! Colgrid separates two concerns:
//! - **Layout** ([`layout`]) picks a column count for a given width and produces a
//!   [`Grid`] of left-justified rows. This is pure computation and never touches a
//!   terminal.
//! - **Presentation** ([`Renderer`], [`Theme`]) wraps the computed rows in minijinja
//!   templates with named styles, degrading to plain text when colours are unsupported.
//!
//! ## Quick Example
//!
//! ```rust
//! use colgrid::layout;
//!
//! let grid = layout(&["alpha", "b", "gamma", "d", "epsilon", "f"], 20).unwrap();
//! assert_eq!(grid.columns(), 2);
//! assert_eq!(
//!     grid.render(),
//!     vec!["alpha    d      ", "b        epsilon", "gamma    f      "]
//! );
//! ```
//!
//! ## Width
//!
//! Label widths are measured in terminal cells with `unicode-width`, so CJK names take
//! two cells and combining marks take none. The display width itself is always an
//! argument; [`terminal_width`] is offered as a convenience for callers that want to
//! size output to stdout.

mod grid;
mod style;

pub use grid::{display_width, layout, pad_right, Grid, LayoutError, COLUMN_GAP};
pub use style::{colors_supported, rgb_to_ansi256, Renderer, Styles, Theme};

use console::Term;

/// Returns the number of columns of the terminal attached to stdout, if any.
pub fn terminal_width() -> Option<usize> {
    Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| usize::from(cols))
        .filter(|cols| *cols > 0)
}
