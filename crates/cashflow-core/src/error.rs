use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
    #[error("Entry id `{0}` matches more than one entry")]
    AmbiguousEntry(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
