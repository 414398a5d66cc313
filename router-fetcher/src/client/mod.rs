//! The main client module. Contains the [`RouterFetcher`] type and all
//! associated structures.
pub(crate) mod builder;
pub(crate) mod fetcher_config;
pub mod response;
pub mod router_config;
pub mod router_error;

pub use builder::RouterFetcherBuilder;
pub use fetcher_config::FetcherConfig;
pub use response::{EndpointDescriptor, SchemaDocument};
pub use router_config::RouterConfig;
pub use router_error::RouterError;


use crate::settings::Settings;
use once_cell::sync::OnceCell;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Header carrying the static credential, when one is configured.
const API_KEY_HEADER: &str = "x-api-key";

/// Placeholder replaced by the service name in the schema URL template.
const SERVICE_NAME_PLACEHOLDER: &str = "{serviceName}";

/// A client for the router service.
///
/// The router maps logical `(service, namespace, method)` identifiers to
/// physical endpoints and serves per-service schema documents. This client
/// performs exactly one HTTP GET per operation; it does not retry, cache
/// responses, or keep sessions.
///
/// Connection settings are read from the configured [`Settings`] source
/// lazily, at the first operation, and memoized for the lifetime of the
/// instance. Cloning is cheap and clones share the memoized configuration.
#[derive(Clone)]
pub struct RouterFetcher {
    http_client: reqwest::Client,
    settings: Arc<dyn Settings>,
    timeout: Option<Duration>,
    api_key_required: bool,
    router_config: Arc<OnceCell<RouterConfig>>,
}

impl std::fmt::Debug for RouterFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterFetcher")
            .field("http_client", &self.http_client)
            .field("settings", &"<dyn Settings>")
            .field("timeout", &self.timeout)
            .field("api_key_required", &self.api_key_required)
            .field("router_config", &self.router_config)
            .finish()
    }
}

impl RouterFetcher {
    /// Create an instance of a [`RouterFetcherBuilder`] for building a
    /// [`RouterFetcher`]. This is simpler than using [`FetcherConfig`] and
    /// [`RouterFetcher::new()`].
    pub fn builder() -> RouterFetcherBuilder {
        Default::default()
    }

    /// Create an instance of a [`RouterFetcher`].
    pub fn new(config: FetcherConfig) -> Result<RouterFetcher, RouterError> {
        let settings = config.settings.ok_or_else(|| {
            RouterError::InvalidRouterConfig("no settings source configured".to_string())
        })?;

        Ok(RouterFetcher {
            http_client: match config.http_client {
                Some(http_client) => http_client,
                None => reqwest::Client::builder().build()?,
            },
            settings,
            timeout: config.timeout,
            api_key_required: config.api_key_required,
            router_config: Arc::new(OnceCell::new()),
        })
    }

    /// The resolved router connection settings.
    ///
    /// The settings source is read on the first call and the validated result
    /// is cached; later calls return the cached value without touching the
    /// source again. A failed resolution is not cached, so a later call
    /// re-attempts it.
    pub fn router_config(&self) -> Result<&RouterConfig, RouterError> {
        self.router_config.get_or_try_init(|| {
            debug!("resolving router config from the settings source");
            RouterConfig::resolve(self.settings.as_ref(), self.api_key_required)
        })
    }

    /// URL endpoint-resolution requests are sent to.
    pub fn endpoint_url_template(&self) -> Result<&str, RouterError> {
        Ok(self.router_config()?.endpoint.as_str())
    }

    /// Schema URL template, with its `{serviceName}` placeholder intact.
    pub fn schema_url_template(&self) -> Result<&str, RouterError> {
        Ok(&self.router_config()?.schema)
    }

    /// Ask the router which physical endpoint serves the logical
    /// `(service, namespace, method)` call, doing one request to the router.
    ///
    /// `http_method` is an optional verb hint; when absent or empty it is not
    /// sent at all.
    ///
    /// Fails with [`RouterError::InvalidRouterConfig`] (or
    /// [`RouterError::InvalidApiKeySetting`]) before any request is issued if
    /// the configuration cannot be resolved, with
    /// [`RouterError::EndpointNotFound`] when the router answers with an
    /// error status, and with [`RouterError::Transport`] when the call itself
    /// fails.
    pub async fn resolve_endpoint(
        &self,
        service: &str,
        namespace: &str,
        method: &str,
        http_method: Option<&str>,
    ) -> Result<EndpointDescriptor, RouterError> {
        let config = self.router_config()?;

        let mut params = vec![
            ("service", service),
            ("namespace", namespace),
            ("method", method),
        ];
        // An absent verb hint must not show up as an empty parameter.
        if let Some(verb) = http_method.filter(|verb| !verb.is_empty()) {
            params.push(("httpMethod", verb));
        }

        debug!(service, namespace, method, "resolving endpoint through the router");

        let response = self
            .get(config.endpoint.clone(), config)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(RouterError::EndpointNotFound {
                service: service.to_string(),
                namespace: namespace.to_string(),
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the schema document of a service, doing one request to the
    /// router.
    ///
    /// The service name is substituted into the schema URL template at its
    /// `{serviceName}` placeholder. Failure classification matches
    /// [`resolve_endpoint`](Self::resolve_endpoint), with an error status
    /// reported as [`RouterError::SchemaNotFound`].
    pub async fn fetch_schema(&self, service: &str) -> Result<SchemaDocument, RouterError> {
        let config = self.router_config()?;
        let url = config
            .schema
            .replacen(SERVICE_NAME_PLACEHOLDER, service, 1);

        debug!(service, %url, "fetching service schema through the router");

        let response = self.get(url, config).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(RouterError::SchemaNotFound {
                service: service.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// A GET request with the headers every router call carries.
    fn get<U: reqwest::IntoUrl>(&self, url: U, config: &RouterConfig) -> reqwest::RequestBuilder {
        let mut request = self
            .http_client
            .get(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(api_key) = &config.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }
}
