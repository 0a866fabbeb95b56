// ghlist: client library for the GitHub users API.
// Exposes user listing and user detail operations over an injectable HTTP transport.

pub mod config;
pub mod error;
pub mod format;
pub mod github;

pub use config::Config;
pub use error::{GhListError, Result};
pub use github::{Endpoint, ReqwestTransport, Transport, UserClient};
pub use github::{ApiAlert, UserDetail, UserSummary, UserType};
