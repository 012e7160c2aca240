use thiserror::Error;

#[derive(Error, Debug)]
pub enum JuliarefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] colgrid::LayoutError),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Logging error: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, JuliarefError>;
