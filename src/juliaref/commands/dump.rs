use crate::catalog::file::write_dump;
use crate::catalog::{CatalogSource, Topic};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Dumps the named topics (all topics when `names` is empty) grouped by category.
///
/// With an `output` path the dump goes to that file and a success message is
/// returned; otherwise the text is returned for the caller to print.
pub fn run<S: CatalogSource>(
    source: &S,
    names: &[String],
    output: Option<&Path>,
) -> Result<CmdResult> {
    let topics: Vec<&Topic> = if names.is_empty() {
        source.topics().iter().collect()
    } else {
        names
            .iter()
            .map(|name| source.topic(name))
            .collect::<Result<_>>()?
    };

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let count = write_dump(&topics, &mut writer)?;
            writer.flush()?;
            debug!(path = %path.display(), count, topics = topics.len(), "wrote category dump");

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Wrote {} names to {}",
                count,
                path.display()
            )));
            Ok(result)
        }
        None => {
            let mut buf = Vec::new();
            write_dump(&topics, &mut buf)?;
            Ok(CmdResult::default().with_text(String::from_utf8_lossy(&buf).into_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::catalog::file::FileCatalog;
    use crate::catalog::Category;
    use crate::error::JuliarefError;
    use std::fs;

    #[test]
    fn dumps_selected_topic_as_text() {
        let result = run(&BuiltinCatalog, &["tuples".to_string()], None).unwrap();
        let text = result.text.unwrap();
        assert!(text.starts_with("# Macros\n@NamedTuple\n\n# Methods\ntuple\n"));
        assert!(text.ends_with("# Types\nTuple\nNTuple\nNamedTuple\nVararg\nPair\n"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn dumps_everything_without_names() {
        let result = run(&BuiltinCatalog, &[], None).unwrap();
        let text = result.text.unwrap();
        for category in Category::ALL {
            assert!(text.contains(&format!("# {}\n", category)), "{}", category);
        }
        // push! is listed under sets and arrays but written once
        assert_eq!(text.lines().filter(|l| *l == "push!").count(), 1);
    }

    #[test]
    fn writes_file_that_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.txt");

        let result = run(&BuiltinCatalog, &["sets".to_string()], Some(&path)).unwrap();
        assert!(result.text.is_none());
        assert!(result.messages[0].content.starts_with("Wrote 35 names"));

        let loaded = FileCatalog::load(&path).unwrap();
        let topic = loaded.topic("sets").unwrap();
        assert_eq!(
            topic.section(Category::Types).unwrap().labels(),
            vec!["AbstractSet", "Set", "BitSet", "Base.IdSet"]
        );
        assert!(fs::read_to_string(&path).unwrap().starts_with("# Methods\n"));
    }

    #[test]
    fn unknown_topic_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let names = vec!["sets".to_string(), "graphs".to_string()];

        let err = run(&BuiltinCatalog, &names, Some(&path)).unwrap_err();
        assert!(matches!(err, JuliarefError::UnknownTopic(_)));
        assert!(!path.exists());
    }
}
