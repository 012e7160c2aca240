//! Column-major grid layout.
//!
//! [`layout`] searches column counts upward from one, stopping at the first count
//! whose printed line would be wider than the display, and keeps the last count
//! that fit. A single column is always accepted, even when one label is wider than
//! the display on its own.

use std::fmt;
use thiserror::Error;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Number of spaces between adjacent columns.
pub const COLUMN_GAP: usize = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("cannot lay out an empty list of labels")]
    NoLabels,

    #[error("display width must be at least one column")]
    ZeroWidth,
}

/// Labels arranged column-major into equally tall columns.
///
/// Every column except possibly the last holds exactly [`Grid::rows`] labels. The
/// last column may be short; its missing cells are blank placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<String>>,
    widths: Vec<usize>,
    rows: usize,
}

/// Lays `labels` out in as many columns as fit within `width` terminal cells.
///
/// # Errors
///
/// Returns [`LayoutError::NoLabels`] for an empty list and [`LayoutError::ZeroWidth`]
/// when `width` is zero. Nothing is laid out in either case.
pub fn layout<S: AsRef<str>>(labels: &[S], width: usize) -> Result<Grid, LayoutError> {
    if labels.is_empty() {
        return Err(LayoutError::NoLabels);
    }
    if width == 0 {
        return Err(LayoutError::ZeroWidth);
    }

    let label_widths: Vec<usize> = labels.iter().map(|l| display_width(l.as_ref())).collect();

    let mut best = Shape::measure(&label_widths, 1);
    for candidate in 2..=labels.len() {
        let shape = Shape::measure(&label_widths, candidate);
        if shape.line_width() > width {
            break;
        }
        best = shape;
    }

    debug!(
        labels = labels.len(),
        width,
        columns = best.widths.len(),
        rows = best.rows,
        line_width = best.line_width(),
        "grid layout chosen"
    );

    let columns = labels
        .chunks(best.rows)
        .map(|chunk| chunk.iter().map(|l| l.as_ref().to_string()).collect())
        .collect();

    Ok(Grid {
        columns,
        widths: best.widths,
        rows: best.rows,
    })
}

/// Column widths and row count for one candidate column count.
struct Shape {
    rows: usize,
    widths: Vec<usize>,
}

impl Shape {
    fn measure(label_widths: &[usize], columns: usize) -> Self {
        let rows = label_widths.len().div_ceil(columns);
        let widths = label_widths
            .chunks(rows)
            .map(|chunk| chunk.iter().copied().max().unwrap_or(0))
            .collect();
        Self { rows, widths }
    }

    fn line_width(&self) -> usize {
        let gaps = COLUMN_GAP * self.widths.len().saturating_sub(1);
        self.widths.iter().sum::<usize>() + gaps
    }
}

impl Grid {
    /// Number of columns actually used.
    ///
    /// This can be smaller than the candidate count that produced it: six labels
    /// asked for four columns need two rows, which fill only three.
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of each column, i.e. its widest label.
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Printed width of every rendered row.
    pub fn line_width(&self) -> usize {
        let gaps = COLUMN_GAP * self.widths.len().saturating_sub(1);
        self.widths.iter().sum::<usize>() + gaps
    }

    /// The label at `row` in column `col`, or `None` for a placeholder or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.columns
            .get(col)
            .and_then(|column| column.get(row))
            .map(String::as_str)
    }

    /// Labels in column-major order, which is the order they were given in.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().flatten().map(String::as_str)
    }

    /// Renders every row, columns padded to their width and joined by [`COLUMN_GAP`] spaces.
    pub fn render(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.render_row(row)).collect()
    }

    fn render_row(&self, row: usize) -> String {
        let gap = " ".repeat(COLUMN_GAP);
        let mut line = String::with_capacity(self.line_width());
        for (col, width) in self.widths.iter().enumerate() {
            if col > 0 {
                line.push_str(&gap);
            }
            line.push_str(&pad_right(self.cell(row, col).unwrap_or(""), *width));
        }
        line
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.render_row(row))?;
        }
        Ok(())
    }
}

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Left-justifies `s` to `width` terminal cells. Text already wider is returned as is.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut padded = String::with_capacity(s.len() + fill);
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_fits_on_one_row() {
        let grid = layout(&["a", "bb", "ccc"], 100).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.render(), vec!["a    bb    ccc"]);
    }

    #[test]
    fn narrow_width_picks_two_columns() {
        let labels = ["alpha", "b", "gamma", "d", "epsilon", "f"];
        let grid = layout(&labels, 20).unwrap();

        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.column_widths(), &[5, 7]);
        assert_eq!(grid.line_width(), 16);

        let rows = grid.render();
        assert_eq!(
            rows,
            vec!["alpha    d      ", "b        epsilon", "gamma    f      "]
        );
        assert!(rows.iter().all(|r| display_width(r) <= 20));
        assert_eq!(grid.labels().collect::<Vec<_>>(), labels);
    }

    #[test]
    fn single_label() {
        let grid = layout(&["x"], 5).unwrap();
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.render(), vec!["x"]);
    }

    #[test]
    fn empty_labels_rejected() {
        let labels: [&str; 0] = [];
        assert_eq!(layout(&labels, 80), Err(LayoutError::NoLabels));
    }

    #[test]
    fn zero_width_rejected() {
        assert_eq!(layout(&["a"], 0), Err(LayoutError::ZeroWidth));
    }

    #[test]
    fn oversized_label_still_printed_in_one_column() {
        let grid = layout(&["averylongnamethatexceedswidth"], 5).unwrap();
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.render(), vec!["averylongnamethatexceedswidth"]);
    }

    #[test]
    fn oversized_label_forces_single_column() {
        let grid = layout(&["a", "muchtoolongforthis", "b"], 8).unwrap();
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.render()[0], "a                 ");
    }

    #[test]
    fn short_last_column_is_blank_padded() {
        // 5 labels in 2 columns: 3 rows, the last column holds 2
        let grid = layout(&["aa", "bb", "cc", "dd", "e"], 10).unwrap();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cell(2, 1), None);
        assert_eq!(grid.render(), vec!["aa    dd", "bb    e ", "cc      "]);
    }

    #[test]
    fn physical_columns_can_be_fewer_than_candidate() {
        // four columns of six labels need two rows, which only fill three columns
        let grid = layout(&["a", "b", "c", "d", "e", "f"], 16).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.render(), vec!["a    c    e", "b    d    f"]);
    }

    #[test]
    fn prefers_more_columns_when_width_allows() {
        // one, two and three columns all fit; the densest packing wins
        let grid = layout(&["aa", "bb", "cc"], 14).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.line_width(), 14);
    }

    #[test]
    fn exact_fit_is_accepted() {
        let grid = layout(&["abc", "def"], 10).unwrap();
        assert_eq!(grid.columns(), 2);
        let grid = layout(&["abc", "def"], 9).unwrap();
        assert_eq!(grid.columns(), 1);
    }

    #[test]
    fn duplicates_are_preserved() {
        let grid = layout(&["dup", "dup", "dup"], 80).unwrap();
        assert_eq!(grid.labels().count(), 3);
        assert_eq!(grid.render(), vec!["dup    dup    dup"]);
    }

    #[test]
    fn wide_characters_use_display_width() {
        // each CJK character occupies two cells
        let grid = layout(&["日本", "ab"], 10).unwrap();
        assert_eq!(grid.column_widths(), &[4, 2]);
        assert_eq!(grid.render(), vec!["日本    ab"]);
    }

    #[test]
    fn display_prints_rendered_rows() {
        let grid = layout(&["one", "two", "three", "four"], 12).unwrap();
        assert_eq!(grid.to_string(), grid.render().join("\n") + "\n");
        assert_eq!(grid.to_string(), "one    three\ntwo    four \n");
    }

    #[test]
    fn pad_right_handles_wider_text() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z@!=<>]{1,14}", 1..48)
    }

    proptest! {
        #[test]
        fn rows_fit_unless_a_single_label_overflows(
            labels in labels_strategy(),
            width in 1usize..120,
        ) {
            let grid = layout(&labels, width).unwrap();
            let widest = labels.iter().map(|l| display_width(l)).max().unwrap_or(0);
            for row in grid.render() {
                let fits = display_width(&row) <= width;
                prop_assert!(fits || (grid.columns() == 1 && widest > width));
            }
        }

        #[test]
        fn every_label_appears_once_in_input_order(
            labels in labels_strategy(),
            width in 1usize..120,
        ) {
            let grid = layout(&labels, width).unwrap();
            let laid_out: Vec<&str> = grid.labels().collect();
            let expected: Vec<&str> = labels.iter().map(String::as_str).collect();
            prop_assert_eq!(laid_out, expected);

            let filled = (0..grid.rows())
                .flat_map(|r| (0..grid.columns()).map(move |c| (r, c)))
                .filter(|(r, c)| grid.cell(*r, *c).is_some())
                .count();
            prop_assert_eq!(filled, labels.len());
        }

        #[test]
        fn layout_is_deterministic(
            labels in labels_strategy(),
            width in 1usize..120,
        ) {
            prop_assert_eq!(layout(&labels, width), layout(&labels, width));
        }

        #[test]
        fn wider_display_never_loses_columns(
            labels in labels_strategy(),
            width in 1usize..120,
            extra in 0usize..60,
        ) {
            let narrow = layout(&labels, width).unwrap();
            let wide = layout(&labels, width + extra).unwrap();
            prop_assert!(wide.columns() >= narrow.columns());
        }
    }
}
