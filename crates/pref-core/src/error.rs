use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefError {
    #[error("Unknown preference category: {0}")]
    UnknownCategory(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PrefError>;
