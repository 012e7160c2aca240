//! Compiled-in topic definitions.
//!
//! One function per topic, grouped by subject. Display order is fixed by [`all`].

use super::Topic;

mod collections;
mod language;
mod numbers;
mod text;
mod time;

pub(super) fn all() -> Vec<Topic> {
    vec![
        language::modules(),
        text::regex(),
        language::variables(),
        numbers::complex(),
        numbers::float(),
        time::dates(),
        language::types(),
        language::functions(),
        collections::sets(),
        collections::arrays(),
        text::chars(),
        collections::tuples(),
    ]
}
