// Error types for the ghlist client.
// Covers transport failures, structured API errors, and decode failures.

use thiserror::Error;

use crate::github::transport::TransportError;

#[derive(Error, Debug)]
pub enum GhListError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("GitHub API error: {message}")]
    Api { message: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing GITHUB_TOKEN environment variable")]
    MissingToken,
}

impl GhListError {
    /// True when the remote service returned a structured error payload.
    pub fn is_api(&self) -> bool {
        matches!(self, GhListError::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, GhListError>;
