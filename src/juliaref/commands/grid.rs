use crate::commands::CmdResult;
use crate::error::Result;

/// Splits free text into labels, one per whitespace-separated word.
///
/// An input without any words yields no labels; laying that out is refused
/// further down, at the formatter.
pub fn run(input: &str) -> Result<CmdResult> {
    let labels = input.split_whitespace().map(str::to_string).collect();
    Ok(CmdResult::default().with_labels(labels))
}
