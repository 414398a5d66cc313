//! Errors that can occur when talking to the router service.

use thiserror::Error;

/// An error returned by [`RouterFetcher`](super::RouterFetcher) operations.
///
/// Configuration failures are detected before any request is issued; the two
/// `*NotFound` variants classify HTTP error statuses from the router; and
/// [`Transport`](RouterError::Transport) covers calls that never produced a
/// status at all, with the originating failure attached as `source`.
#[derive(Error, Debug)]
pub enum RouterError {
    /// The router config entry lacks an API key while the client requires
    /// one. See
    /// [`RouterFetcherBuilder::require_api_key`](super::RouterFetcherBuilder::require_api_key).
    #[error("Invalid api key setting: {0}")]
    InvalidApiKeySetting(String),

    /// The router responded with an error status to a schema request.
    #[error("Schema not found for service '{service}'")]
    SchemaNotFound {
        /// The service whose schema was requested.
        service: String,
        /// The HTTP status returned by the router.
        status: u16,
    },

    /// The settings source is missing the router config entry, or the entry
    /// lacks a usable endpoint or schema URL template.
    #[error("Invalid router config setting: {0}")]
    InvalidRouterConfig(String),

    /// The router responded with an error status to an endpoint-resolution
    /// request.
    #[error("Endpoint not found: {service} - {namespace} - {method}")]
    EndpointNotFound {
        /// The requested service.
        service: String,
        /// The requested namespace.
        namespace: String,
        /// The requested method.
        method: String,
        /// The HTTP status returned by the router.
        status: u16,
    },

    /// The HTTP call itself could not be completed, e.g. connection refused,
    /// DNS failure or timeout. Distinct from an HTTP error status.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RouterError {
    /// A stable numeric code identifying the failure class, for callers that
    /// report or branch on it without matching variants.
    pub fn code(&self) -> u8 {
        match self {
            RouterError::InvalidApiKeySetting(_) => 1,
            RouterError::SchemaNotFound { .. } => 2,
            RouterError::InvalidRouterConfig(_) => 3,
            RouterError::EndpointNotFound { .. } => 4,
            RouterError::Transport(_) => 5,
        }
    }
}
