//! Error types for registry and discovery operations.
//!
//! This module provides the error taxonomy shared by the resource type
//! registry and the discovery handlers. Every error is a typed failure the
//! immediate caller can act on; the core never retries or logs on its own.

/// Main error type for SCIM registry operations.
///
/// Covers registration-time failures (fatal to bootstrap) and the
/// read-path failures a transport layer translates to protocol responses.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// Resource not found errors
    #[error("Resource not found: {resource_type} with ID {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// Schema not found errors
    #[error("Schema not found: {schema_id}")]
    SchemaNotFound { schema_id: String },

    /// No resource type is registered under the given endpoint path
    #[error("No resource type registered for endpoint '{endpoint}'")]
    ResourceTypeNotFound { endpoint: String },

    /// Registration-time conflict on an endpoint path
    #[error("Endpoint '{endpoint}' is already registered")]
    DuplicateEndpoint { endpoint: String },

    /// Registration-time conflict on a primary schema URN
    #[error("Schema '{schema_id}' is already the primary schema of endpoint '{endpoint}'")]
    DuplicatePrimarySchema { schema_id: String, endpoint: String },

    /// A schema document exposed through discovery must carry an id
    #[error("Schema '{name}' has no id and cannot be registered for discovery")]
    MissingSchemaId { name: String },

    /// Operation categorically unsupported by the resource handler.
    ///
    /// Distinct from [`ScimError::ResourceNotFound`]: callers must not mask
    /// this as a 404.
    #[error("Operation '{operation}' is not implemented for resource type '{resource_type}'")]
    NotImplemented {
        resource_type: String,
        operation: String,
    },

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

// Convenience methods for creating common errors
impl ScimError {
    /// Create a resource not found error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(schema_id: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            schema_id: schema_id.into(),
        }
    }

    /// Create a not implemented error
    pub fn not_implemented(resource_type: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            resource_type: resource_type.into(),
            operation: operation.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to at the transport boundary.
    ///
    /// The core performs no transport work itself; this mapping exists so
    /// every transport layer translates the taxonomy the same way.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ResourceNotFound { .. }
            | Self::SchemaNotFound { .. }
            | Self::ResourceTypeNotFound { .. } => 404,
            Self::DuplicateEndpoint { .. } | Self::DuplicatePrimarySchema { .. } => 409,
            Self::NotImplemented { .. } => 501,
            Self::MissingSchemaId { .. } | Self::InvalidRequest { .. } | Self::Json(_) => 400,
            Self::Internal { .. } => 500,
        }
    }

    /// Whether this error signals a categorically unsupported operation.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Whether this error signals a missing resource, schema, or endpoint.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. }
                | Self::SchemaNotFound { .. }
                | Self::ResourceTypeNotFound { .. }
        )
    }
}

/// Result type alias for registry operations.
pub type ScimResult<T> = Result<T, ScimError>;
