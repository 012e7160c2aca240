use crate::catalog::{CatalogSource, Category};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Fetches one topic, optionally narrowed to a single category.
pub fn run<S: CatalogSource>(
    source: &S,
    name: &str,
    category: Option<Category>,
) -> Result<CmdResult> {
    let mut topic = source.topic(name)?.clone();
    let mut result = CmdResult::default();

    if let Some(category) = category {
        topic.sections.retain(|s| s.category == category);
        if topic.sections.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "{} lists no {}.",
                topic.title,
                category.name().to_lowercase()
            )));
        }
    }

    Ok(result.with_topic(topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::commands::MessageLevel;
    use crate::error::JuliarefError;

    #[test]
    fn returns_whole_topic() {
        let result = run(&BuiltinCatalog, "sets", None).unwrap();
        let topic = result.topic.unwrap();
        assert_eq!(topic.key, "sets");
        assert_eq!(topic.sections.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn narrows_to_category() {
        let result = run(&BuiltinCatalog, "sets", Some(Category::Operators)).unwrap();
        let topic = result.topic.unwrap();
        assert_eq!(topic.sections.len(), 1);
        assert_eq!(topic.sections[0].category, Category::Operators);
    }

    #[test]
    fn warns_when_category_absent() {
        let result = run(&BuiltinCatalog, "chars", Some(Category::Macros)).unwrap();
        assert!(result.topic.unwrap().sections.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Characters lists no macros.");
    }

    #[test]
    fn unknown_topic_errors() {
        let err = run(&BuiltinCatalog, "strings", None).unwrap_err();
        assert!(matches!(err, JuliarefError::UnknownTopic(name) if name == "strings"));
    }
}
