//! Test doubles for registry unit tests.

use crate::error::{ScimError, ScimResult};
use crate::resource::{ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler};
use async_trait::async_trait;
use serde_json::Value;

/// Placeholder collaborator standing in for a storage-backed handler.
///
/// The registry never dispatches through concrete handlers itself, so the
/// stub only needs to satisfy the contract shape.
pub(crate) struct StubHandler {
    resource_type: &'static str,
}

impl StubHandler {
    pub(crate) fn new(resource_type: &'static str) -> Self {
        Self { resource_type }
    }
}

#[async_trait]
impl ResourceHandler for StubHandler {
    fn resource_type(&self) -> &str {
        self.resource_type
    }

    async fn get_resource(&self, id: &str, _context: &RequestContext) -> ScimResult<Resource> {
        Err(ScimError::resource_not_found(self.resource_type, id))
    }

    async fn list_resources(
        &self,
        query: &ListQuery,
        _context: &RequestContext,
    ) -> ScimResult<PartialListResponse<Resource>> {
        Ok(PartialListResponse::new(
            Vec::new(),
            0,
            query.effective_start_index(),
        ))
    }

    async fn create_resource(
        &self,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented(self.resource_type, "create"))
    }

    async fn update_resource(
        &self,
        _id: &str,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented(self.resource_type, "update"))
    }

    async fn delete_resource(&self, _id: &str, _context: &RequestContext) -> ScimResult<()> {
        Err(ScimError::not_implemented(self.resource_type, "delete"))
    }
}
