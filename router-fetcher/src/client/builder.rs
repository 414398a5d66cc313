use crate::client::fetcher_config::FetcherConfig;
use crate::client::{RouterError, RouterFetcher};
use crate::settings::Settings;
use std::sync::Arc;
use std::time::Duration;

/// A builder for a [`RouterFetcher`].
#[derive(Default)]
pub struct RouterFetcherBuilder {
    config: FetcherConfig,
}

impl RouterFetcherBuilder {
    /// Create an instance of [`RouterFetcher`] with the information from this
    /// builder.
    pub fn build(self) -> Result<RouterFetcher, RouterError> {
        RouterFetcher::new(self.config)
    }

    /// Set the settings source the router configuration is read from. This is
    /// required.
    pub fn with_settings<S>(self, settings: S) -> Self
    where
        S: 'static + Settings,
    {
        RouterFetcherBuilder {
            config: FetcherConfig {
                settings: Some(Arc::new(settings)),
                ..self.config
            },
        }
    }

    /// Same as [`with_settings`](Self::with_settings), but accepts an already
    /// shared implementation instead of a direct type.
    pub fn with_shared_settings(self, settings: Arc<dyn Settings>) -> Self {
        RouterFetcherBuilder {
            config: FetcherConfig {
                settings: Some(settings),
                ..self.config
            },
        }
    }

    /// Set the `reqwest` client used for router requests. By default a new
    /// client is created; inject one to share connection pools with the rest
    /// of the process.
    pub fn with_http_client(self, http_client: reqwest::Client) -> Self {
        RouterFetcherBuilder {
            config: FetcherConfig {
                http_client: Some(http_client),
                ..self.config
            },
        }
    }

    /// Set a per-request timeout. Expiry surfaces as
    /// [`RouterError::Transport`]. By default requests only time out if the
    /// underlying client does.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        RouterFetcherBuilder {
            config: FetcherConfig {
                timeout: Some(timeout),
                ..self.config
            },
        }
    }

    /// Treat an absent `apiKey` field in the router config entry as a
    /// configuration failure
    /// ([`RouterError::InvalidApiKeySetting`]) instead of an optional header.
    pub fn require_api_key(self) -> Self {
        RouterFetcherBuilder {
            config: FetcherConfig {
                api_key_required: true,
                ..self.config
            },
        }
    }
}
