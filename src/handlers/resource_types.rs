//! Resource type discovery handler for the /ResourceTypes endpoint.

use super::paginate;
use crate::error::{ScimError, ScimResult};
use crate::registry::ResourceTypeRegistry;
use crate::resource::{ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler};
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::sync::{Arc, Weak};

/// Read-only handler enumerating the registered resource types.
///
/// Resource types are addressed by name (e.g., "User"), mirroring their
/// `id` in the RFC 7643 representation. Enumeration order is registration
/// order.
pub struct ResourceTypeHandler {
    registry: Weak<ResourceTypeRegistry>,
}

impl std::fmt::Debug for ResourceTypeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceTypeHandler")
            .field("registry", &self.registry.upgrade().is_some())
            .finish()
    }
}

impl ResourceTypeHandler {
    pub(crate) fn new(registry: Weak<ResourceTypeRegistry>) -> Self {
        Self { registry }
    }

    /// Create a handler bound to a published registry.
    pub fn for_registry(registry: &Arc<ResourceTypeRegistry>) -> Self {
        Self {
            registry: Arc::downgrade(registry),
        }
    }

    fn registry(&self) -> ScimResult<Arc<ResourceTypeRegistry>> {
        self.registry
            .upgrade()
            .ok_or_else(|| ScimError::internal("resource type registry has been dropped"))
    }
}

#[async_trait]
impl ResourceHandler for ResourceTypeHandler {
    fn resource_type(&self) -> &str {
        "ResourceType"
    }

    async fn get_resource(&self, id: &str, context: &RequestContext) -> ScimResult<Resource> {
        debug!("[{}] get resource type '{}'", context.request_id, id);
        let registry = self.registry()?;
        let resource_type = registry
            .resource_types()
            .iter()
            .find(|resource_type| resource_type.name == id)
            .ok_or_else(|| ScimError::resource_not_found("ResourceType", id))?;
        Ok(Resource::new("ResourceType", resource_type.to_scim_json()))
    }

    async fn list_resources(
        &self,
        query: &ListQuery,
        context: &RequestContext,
    ) -> ScimResult<PartialListResponse<Resource>> {
        debug!(
            "[{}] list resource types (startIndex={:?}, count={:?})",
            context.request_id, query.start_index, query.count
        );
        let registry = self.registry()?;
        let representations: Vec<Value> = registry
            .resource_types()
            .iter()
            .map(|resource_type| resource_type.to_scim_json())
            .collect();
        Ok(paginate(&representations, query).map(|data| Resource::new("ResourceType", data)))
    }

    async fn create_resource(
        &self,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("ResourceType", "create"))
    }

    async fn update_resource(
        &self,
        _id: &str,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("ResourceType", "update"))
    }

    async fn delete_resource(&self, _id: &str, _context: &RequestContext) -> ScimResult<()> {
        Err(ScimError::not_implemented("ResourceType", "delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;
    use crate::testing::StubHandler;

    fn fixture() -> Arc<ResourceTypeRegistry> {
        endpoints::standard_registry(
            Arc::new(StubHandler::new("User")),
            Arc::new(StubHandler::new("Group")),
        )
        .expect("standard registry builds")
    }

    #[tokio::test]
    async fn test_get_resource_type_by_name() {
        let registry = fixture();
        let handler = ResourceTypeHandler::for_registry(&registry);
        let context = RequestContext::with_generated_id();

        for name in ["User", "Group", "Schema", "ResourceType"] {
            let resource = handler.get_resource(name, &context).await.unwrap();
            assert_eq!(resource.get_id(), Some(name));
        }

        let error = handler.get_resource("Unknown", &context).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_list_covers_all_registered_types() {
        let registry = fixture();
        let handler = ResourceTypeHandler::for_registry(&registry);
        let context = RequestContext::with_generated_id();

        let page = handler
            .list_resources(&ListQuery::new(), &context)
            .await
            .unwrap();
        assert_eq!(page.resources.len(), registry.resource_types().len());
        assert_eq!(page.total_results, registry.resource_types().len());
    }

    #[tokio::test]
    async fn test_mutations_rejected() {
        let registry = fixture();
        let handler = ResourceTypeHandler::for_registry(&registry);
        let context = RequestContext::with_generated_id();

        assert!(
            handler
                .create_resource(serde_json::json!({}), &context)
                .await
                .unwrap_err()
                .is_not_implemented()
        );
        assert!(
            handler
                .delete_resource("User", &context)
                .await
                .unwrap_err()
                .is_not_implemented()
        );
    }
}
