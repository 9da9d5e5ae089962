//! Standard endpoint definitions built from the embedded core schemas.
//!
//! These factories wire the RFC 7644 resource endpoints to caller-supplied
//! handlers, ready for registration with the
//! [`ResourceTypeRegistryBuilder`](crate::ResourceTypeRegistryBuilder).
//! Storage-backed handler implementations are a collaborator concern; this
//! crate only defines the contract they implement.

use crate::constants::endpoint_paths;
use crate::error::ScimResult;
use crate::registry::{ResourceType, ResourceTypeRegistry, ResourceTypeRegistryBuilder};
use crate::resource::ResourceHandler;
use crate::schema::{Schema, embedded};
use std::sync::Arc;

/// The /Users endpoint: User schema plus the EnterpriseUser extension.
pub fn user_endpoint(handler: Arc<dyn ResourceHandler>) -> ScimResult<ResourceType> {
    let user = Arc::new(Schema::parse(embedded::user_schema())?);
    let enterprise = Arc::new(Schema::parse(embedded::enterprise_user_schema())?);
    Ok(
        ResourceType::new("User", endpoint_paths::USERS, user, handler)
            .with_description("User Account")
            .with_extension(enterprise, false),
    )
}

/// The /Groups endpoint.
pub fn group_endpoint(handler: Arc<dyn ResourceHandler>) -> ScimResult<ResourceType> {
    let group = Arc::new(Schema::parse(embedded::group_schema())?);
    Ok(
        ResourceType::new("Group", endpoint_paths::GROUPS, group, handler)
            .with_description("Group"),
    )
}

/// Build a registry with the standard /Users and /Groups endpoints.
///
/// The discovery endpoints (/Schemas, /ResourceTypes,
/// /ServiceProviderConfig) are appended automatically by the builder.
pub fn standard_registry(
    user_handler: Arc<dyn ResourceHandler>,
    group_handler: Arc<dyn ResourceHandler>,
) -> ScimResult<Arc<ResourceTypeRegistry>> {
    let mut builder = ResourceTypeRegistryBuilder::new();
    builder.register(user_endpoint(user_handler)?)?;
    builder.register(group_endpoint(group_handler)?)?;
    builder.build()
}
