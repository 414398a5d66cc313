use crate::settings::Settings;
use std::{sync::Arc, time::Duration};

/// A configuration for a [`RouterFetcher`](super::RouterFetcher).
#[derive(Clone, Default)]
pub struct FetcherConfig {
    /// See [`with_settings`](super::RouterFetcherBuilder::with_settings).
    pub settings: Option<Arc<dyn Settings>>,
    /// See [`with_http_client`](super::RouterFetcherBuilder::with_http_client).
    pub http_client: Option<reqwest::Client>,
    /// See [`with_timeout`](super::RouterFetcherBuilder::with_timeout).
    pub timeout: Option<Duration>,
    /// See [`require_api_key`](super::RouterFetcherBuilder::require_api_key).
    pub api_key_required: bool,
}
