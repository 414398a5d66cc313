//! Response bodies returned by the router service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded body of an endpoint-resolution response.
///
/// The router is expected to include at least the physical `endpoint` URL and
/// usually the verb to use against it, but nothing is enforced here: the body
/// is decoded and handed to the caller as-is, with unrecognized fields
/// preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Physical URL of the resolved microservice endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// HTTP verb to use against [`endpoint`](Self::endpoint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// Any remaining response fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decoded body of a schema response.
///
/// The document shape (typically an OpenAPI-like description) is owned by the
/// service that published it, so it stays opaque here.
pub type SchemaDocument = Value;
