//! The shared CRUD capability trait for resource handlers.

use super::context::{ListQuery, RequestContext};
use super::resource::Resource;
use super::response::PartialListResponse;
use crate::error::ScimResult;
use async_trait::async_trait;
use serde_json::Value;

/// Capability trait implemented by every endpoint handler.
///
/// All handlers expose the same five operations with uniform signatures,
/// whether they are backed by mutable storage (User, Group) or by the
/// immutable registry (Schemas, ResourceTypes, ServiceProviderConfig).
/// A handler that does not support an operation returns
/// [`ScimError::NotImplemented`](crate::ScimError::NotImplemented) rather
/// than panicking or masking the failure as a 404, so transports can
/// distinguish "categorically unsupported" from "not found".
///
/// The trait is object-safe so the registry can store heterogeneous
/// handlers as `Arc<dyn ResourceHandler>`.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// The resource type this handler serves (e.g., "User", "Schema").
    fn resource_type(&self) -> &str;

    /// Retrieve a single resource by id.
    async fn get_resource(&self, id: &str, context: &RequestContext) -> ScimResult<Resource>;

    /// List resources with pagination.
    async fn list_resources(
        &self,
        query: &ListQuery,
        context: &RequestContext,
    ) -> ScimResult<PartialListResponse<Resource>>;

    /// Create a new resource.
    async fn create_resource(&self, data: Value, context: &RequestContext)
    -> ScimResult<Resource>;

    /// Replace an existing resource.
    async fn update_resource(
        &self,
        id: &str,
        data: Value,
        context: &RequestContext,
    ) -> ScimResult<Resource>;

    /// Delete a resource by id.
    async fn delete_resource(&self, id: &str, context: &RequestContext) -> ScimResult<()>;
}
