use std::io;
use std::sync::Arc;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("io operation failed: {0}")]
    IoFailed(Arc<io::Error>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid JSON in {path}: {error}")]
    InvalidJson {
        path: String,
        error: Arc<serde_json::Error>,
    },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(Arc<ron::error::SpannedError>),
    #[error("background task failed: {0}")]
    TaskFailed(Arc<tokio::task::JoinError>),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::IoFailed(Arc::new(error))
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(error: ron::error::SpannedError) -> Self {
        Self::InvalidLayout(Arc::new(error))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::TaskFailed(Arc::new(error))
    }
}
