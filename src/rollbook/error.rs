use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Duplicate student ID: {0}")]
    DuplicateId(String),

    #[error("No identifiers left after suffix {0}")]
    IdSpaceExhausted(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, RollbookError>;
