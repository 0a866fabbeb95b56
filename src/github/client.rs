// GitHub users API client.
// Builds requests from endpoint descriptors, dispatches them through the
// transport, and decodes bodies into typed outcomes.

use tracing::{debug, error};

use crate::config::Config;
use crate::error::{GhListError, Result};
use crate::format::pretty_body;

use super::endpoint::Endpoint;
use super::transport::{ReqwestTransport, Transport, TransportResponse};
use super::types::{ApiAlert, UserDetail, UserSummary};

/// Client for the GitHub users API.
///
/// Holds no mutable state; a single instance can serve concurrent calls.
/// Each operation issues exactly one request and always settles: every call
/// resolves with a model or fails with a transport, API, or decode error.
/// Dropping a returned future cancels the in-flight request.
pub struct UserClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: Config,
}

impl UserClient<ReqwestTransport> {
    /// Create a client with the reqwest transport, using the configured timeout.
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self { transport, config })
    }

    /// Create a client from the GITHUB_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }
}

impl<T: Transport> UserClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// List users starting after the `since` cursor, one page of the
    /// configured size.
    pub async fn list_users(&self, since: u64) -> Result<Vec<UserSummary>> {
        let endpoint = Endpoint::ListUsers {
            since,
            per_page: self.config.page_size,
        };
        let response = self.dispatch(&endpoint).await?;

        // Probe the error payload first so each call settles exactly one way:
        // a listing body is a JSON array and never matches the error shape.
        if let Ok(alert) = serde_json::from_slice::<ApiAlert>(&response.body) {
            return Err(GhListError::Api {
                message: alert.message.unwrap_or_default(),
            });
        }

        let users = serde_json::from_slice::<Vec<UserSummary>>(&response.body)?;
        Ok(users)
    }

    /// Fetch a single user's profile.
    pub async fn get_user_detail(&self, username: &str) -> Result<UserDetail> {
        let endpoint = Endpoint::UserDetail {
            username: username.to_string(),
        };
        let response = self.dispatch(&endpoint).await?;

        let detail = serde_json::from_slice::<UserDetail>(&response.body)?;
        Ok(detail)
    }

    /// Execute one request. Transport failures are logged here, once, and
    /// propagated unchanged.
    async fn dispatch(&self, endpoint: &Endpoint) -> Result<TransportResponse> {
        let request = endpoint.to_request(&self.config.token);
        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(
                    status = %response.status,
                    body = %pretty_body(&response.body),
                    "response received"
                );
                Ok(response)
            }
            Err(err) => {
                error!(error = %err, "transport failure");
                Err(GhListError::Transport(err))
            }
        }
    }
}
