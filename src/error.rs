//! Error type shared by the storage, HTTP and media boundaries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// Session or local storage refused the read/write.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The media element refused to start or load.
    #[error("playback error: {0}")]
    Playback(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;

