use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load {0}: {1}")]
    LoadError(String, String),

    #[error("No match data loaded")]
    NoMatches,

    #[error("Invalid match entry: {0}")]
    ValidationError(String),

    #[error("Match id already present in dataset: {0}")]
    DuplicateMatch(String),

    #[error("Configuration error: {0}")]
    #[allow(dead_code)]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
