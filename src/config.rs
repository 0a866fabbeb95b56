// Client configuration.
// The API token is always injected (environment or caller-supplied), never compiled in.

use std::time::Duration;

use crate::error::{GhListError, Result};

/// Page size used by `list_users` when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Request timeout applied to the reqwest transport. reqwest has no default
/// timeout of its own, so this is always set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`UserClient`](crate::UserClient).
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub timeout: Duration,
    pub page_size: u32,
}

impl Config {
    /// Create a configuration with the given token and default timeout and page size.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a configuration from the GITHUB_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| GhListError::MissingToken)?;
        Ok(Self::new(token))
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the listing page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}
