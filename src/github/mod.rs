// GitHub API module.
// Provides the request descriptor, transport abstraction, client, and response types.

pub mod client;
pub mod endpoint;
pub mod transport;
pub mod types;

pub use client::UserClient;
pub use endpoint::Endpoint;
pub use transport::{Request, ReqwestTransport, Transport, TransportError, TransportResponse};
pub use types::*;
