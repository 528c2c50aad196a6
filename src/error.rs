use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HandicapError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid player id: {0}")]
    InvalidPlayer(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<StorageError> for HandicapError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HandicapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
