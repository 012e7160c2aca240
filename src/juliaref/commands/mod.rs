use crate::catalog::Topic;
use crate::config::JuliarefConfig;

pub mod config;
pub mod dump;
pub mod grid;
pub mod show;
pub mod topics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Topics to list by key and title
    pub listed_topics: Vec<Topic>,
    /// A topic to print in full
    pub topic: Option<Topic>,
    /// Free labels to print as a single grid
    pub labels: Vec<String>,
    /// Generated text for the caller to print as is
    pub text: Option<String>,
    pub config: Option<JuliarefConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_topics(mut self, topics: Vec<Topic>) -> Self {
        self.listed_topics = topics;
        self
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_config(mut self, config: JuliarefConfig) -> Self {
        self.config = Some(config);
        self
    }
}
