use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to the playback authority
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server returned status {status} for {path}")]
    Status { status: u16, path: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Rejected by server: {0}")]
    Rejected(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl PlaybackError {
    /// Whether retrying on the next tick can reasonably succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_) | Self::Status { .. })
    }
}

impl From<reqwest::Error> for PlaybackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
