//! Well-known SCIM URNs and endpoint paths.

/// Schema URNs from RFC 7643.
pub mod schema_uris {
    /// Core User schema URN
    pub const USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
    /// Enterprise User extension schema URN
    pub const ENTERPRISE_USER: &str =
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";
    /// Core Group schema URN
    pub const GROUP: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
    /// Schema meta-schema URN
    pub const SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Schema";
    /// ResourceType schema URN
    pub const RESOURCE_TYPE: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
    /// ServiceProviderConfig schema URN
    pub const SERVICE_PROVIDER_CONFIG: &str =
        "urn:ietf:params:scim:schemas:core:2.0:ServiceProviderConfig";
    /// ListResponse message URN
    pub const LIST_RESPONSE: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";
}

/// Endpoint paths from RFC 7644.
pub mod endpoint_paths {
    /// User resource endpoint
    pub const USERS: &str = "/Users";
    /// Group resource endpoint
    pub const GROUPS: &str = "/Groups";
    /// Schema discovery endpoint
    pub const SCHEMAS: &str = "/Schemas";
    /// Resource type discovery endpoint
    pub const RESOURCE_TYPES: &str = "/ResourceTypes";
    /// Service provider configuration endpoint
    pub const SERVICE_PROVIDER_CONFIG: &str = "/ServiceProviderConfig";
}
