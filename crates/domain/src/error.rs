use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed dataset snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DomainError>;
