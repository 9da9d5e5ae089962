//! Service provider configuration as defined in RFC 7644 §5.
//!
//! Describes the capabilities of the SCIM service provider, served through
//! the virtual /ServiceProviderConfig endpoint.

use crate::constants::{endpoint_paths, schema_uris};
use crate::error::ScimResult;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Service provider configuration.
///
/// The configuration is fixed at bootstrap, like everything else published
/// through discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProviderConfig {
    /// URI of the provider's human-consumable documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_uri: Option<String>,
    /// PATCH support
    pub patch: SupportedFeature,
    /// Bulk operation support
    pub bulk: BulkConfig,
    /// Filter support
    pub filter: FilterConfig,
    /// Password change support
    pub change_password: SupportedFeature,
    /// Sort support
    pub sort: SupportedFeature,
    /// ETag versioning support
    pub etag: SupportedFeature,
    /// Supported authentication schemes
    #[serde(default)]
    pub authentication_schemes: Vec<AuthenticationScheme>,
}

impl ServiceProviderConfig {
    /// RFC 7643 wire representation, including the schemas declaration.
    pub fn to_scim_json(&self) -> ScimResult<Value> {
        let mut value = serde_json::to_value(self)?;
        value["schemas"] = json!([schema_uris::SERVICE_PROVIDER_CONFIG]);
        value["meta"] = json!({
            "resourceType": "ServiceProviderConfig",
            "location": endpoint_paths::SERVICE_PROVIDER_CONFIG,
        });
        Ok(value)
    }
}

/// A feature toggle ("supported": bool) sub-object.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportedFeature {
    /// Whether the feature is supported
    pub supported: bool,
}

impl SupportedFeature {
    /// Mark the feature as supported.
    pub fn supported() -> Self {
        Self { supported: true }
    }
}

/// Bulk operation limits.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BulkConfig {
    /// Whether bulk operations are supported
    pub supported: bool,
    /// Maximum number of operations in a bulk request
    pub max_operations: u32,
    /// Maximum payload size in bytes for bulk requests
    pub max_payload_size: u64,
}

/// Filter limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Whether filtering is supported
    pub supported: bool,
    /// Maximum number of resources returned per query
    pub max_results: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            supported: false,
            max_results: 200,
        }
    }
}

/// Authentication scheme advertised by the service provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationScheme {
    /// Authentication scheme name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Authentication type (e.g., "oauth2", "httpbasic")
    #[serde(rename = "type")]
    pub auth_type: String,
    /// URI of the scheme's specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_uri: Option<String>,
    /// URI of the scheme's documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_uri: Option<String>,
    /// Whether this scheme is the primary authentication method
    #[serde(default)]
    pub primary: bool,
}
