//! Router connection settings and their one-time resolution.

use crate::client::RouterError;
use crate::settings::Settings;
use serde::Deserialize;
use url::Url;

/// The settings key holding the router connection entry.
pub const ROUTER_CONFIG_KEY: &str = "routerConfig";

/// Validated router connection settings.
///
/// Resolved from the settings source at most once per
/// [`RouterFetcher`](super::RouterFetcher) instance and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// URL endpoint-resolution requests are sent to.
    pub endpoint: Url,
    /// Schema URL template, containing a `{serviceName}` placeholder.
    pub schema: String,
    /// Static credential attached to requests as `x-api-key` when present.
    pub api_key: Option<String>,
}

/// The settings entry as it appears on the wire. Validation produces the
/// contract messages, so every field is optional here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRouterConfig {
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    api_key: Option<String>,
}

impl RouterConfig {
    /// Reads the `routerConfig` entry from the settings source and validates
    /// it. `api_key_required` turns an absent credential into a failure.
    pub(crate) fn resolve(
        settings: &dyn Settings,
        api_key_required: bool,
    ) -> Result<Self, RouterError> {
        let entry = settings.get(ROUTER_CONFIG_KEY).ok_or_else(|| {
            RouterError::InvalidRouterConfig(format!(
                "missing router config setting '{ROUTER_CONFIG_KEY}'"
            ))
        })?;

        let raw: RawRouterConfig = serde_json::from_value(entry).map_err(|err| {
            RouterError::InvalidRouterConfig(format!("malformed router config setting: {err}"))
        })?;

        let endpoint = raw
            .endpoint
            .filter(|url| !url.is_empty())
            .ok_or_else(|| RouterError::InvalidRouterConfig("missing endpoint URL".to_string()))?;
        let endpoint = Url::parse(&endpoint).map_err(|err| {
            RouterError::InvalidRouterConfig(format!("invalid endpoint URL '{endpoint}': {err}"))
        })?;

        let schema = raw
            .schema
            .filter(|url| !url.is_empty())
            .ok_or_else(|| RouterError::InvalidRouterConfig("missing schema URL".to_string()))?;

        let api_key = raw.api_key.filter(|key| !key.is_empty());
        if api_key_required && api_key.is_none() {
            return Err(RouterError::InvalidApiKeySetting(format!(
                "missing api key in setting '{ROUTER_CONFIG_KEY}'"
            )));
        }

        Ok(Self {
            endpoint,
            schema,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::StaticSettings;
    use serde_json::json;

    fn settings_with_entry(entry: serde_json::Value) -> StaticSettings {
        [(ROUTER_CONFIG_KEY.to_string(), entry)].into_iter().collect()
    }

    #[test]
    fn resolves_a_complete_entry() {
        let settings = settings_with_entry(json!({
            "endpoint": "http://router/api/endpoint",
            "schema": "http://router/api/services/{serviceName}/schema",
            "apiKey": "insecure-local-key",
        }));

        let config = RouterConfig::resolve(&settings, false).unwrap();

        assert_eq!(config.endpoint.as_str(), "http://router/api/endpoint");
        assert_eq!(config.schema, "http://router/api/services/{serviceName}/schema");
        assert_eq!(config.api_key.as_deref(), Some("insecure-local-key"));
    }

    #[test]
    fn fails_without_the_entry() {
        let settings = StaticSettings::default();

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
        assert!(format!("{err}").contains("missing router config setting 'routerConfig'"));
    }

    #[test]
    fn fails_without_an_endpoint() {
        let settings = settings_with_entry(json!({
            "schema": "http://router/api/services/{serviceName}/schema",
        }));

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
        assert!(format!("{err}").contains("missing endpoint URL"));
    }

    #[test]
    fn fails_without_a_schema() {
        let settings = settings_with_entry(json!({
            "endpoint": "http://router/api/endpoint",
        }));

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
        assert!(format!("{err}").contains("missing schema URL"));
    }

    #[test]
    fn treats_an_empty_endpoint_as_missing() {
        let settings = settings_with_entry(json!({
            "endpoint": "",
            "schema": "http://router/api/services/{serviceName}/schema",
        }));

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(format!("{err}").contains("missing endpoint URL"));
    }

    #[test]
    fn rejects_an_unparsable_endpoint() {
        let settings = settings_with_entry(json!({
            "endpoint": "not a url",
            "schema": "http://router/api/services/{serviceName}/schema",
        }));

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
    }

    #[test]
    fn rejects_a_non_object_entry() {
        let settings = settings_with_entry(json!("http://router/api/endpoint"));

        let err = RouterConfig::resolve(&settings, false).unwrap_err();

        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
    }

    #[test]
    fn api_key_is_optional_by_default() {
        let settings = settings_with_entry(json!({
            "endpoint": "http://router/api/endpoint",
            "schema": "http://router/api/services/{serviceName}/schema",
        }));

        let config = RouterConfig::resolve(&settings, false).unwrap();

        assert_eq!(config.api_key, None);
    }

    #[test]
    fn a_required_api_key_must_be_present() {
        let settings = settings_with_entry(json!({
            "endpoint": "http://router/api/endpoint",
            "schema": "http://router/api/services/{serviceName}/schema",
        }));

        let err = RouterConfig::resolve(&settings, true).unwrap_err();

        assert!(matches!(err, RouterError::InvalidApiKeySetting(_)));
        assert_eq!(err.code(), 1);
    }
}
