//! Schema discovery handler for the /Schemas endpoint.
//!
//! Exposes the registry's deduplicated schema set as a virtual, read-only
//! resource endpoint per RFC 7644 §4. The schema catalog is fixed when the
//! registry is published; the handler has exactly one reachable state,
//! "bound to a published registry", and no transition to a mutable one.

use super::paginate;
use crate::constants::schema_uris;
use crate::error::{ScimError, ScimResult};
use crate::registry::ResourceTypeRegistry;
use crate::resource::{ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler};
use crate::schema::Schema;
use async_trait::async_trait;
use log::debug;
use serde_json::{Value, json};
use std::sync::{Arc, Weak};

/// Read-only handler serving the registry's schema documents.
///
/// Looks up schemas by URN and enumerates them with SCIM pagination. The
/// enumeration order is the registry's first-appearance order, which is
/// deterministic for a fixed registry instance; repeated identical calls
/// return identical results.
pub struct SchemaHandler {
    registry: Weak<ResourceTypeRegistry>,
}

impl std::fmt::Debug for SchemaHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaHandler")
            .field("registry", &self.registry.upgrade().is_some())
            .finish()
    }
}

impl SchemaHandler {
    /// Create a handler over a registry that is still being assembled.
    ///
    /// Used by the registry builder; the weak handle becomes live once the
    /// registry is published.
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

    /// Look up a schema document by its URN.
    ///
    /// Fails with [`ScimError::ResourceNotFound`] (a 404-class outcome,
    /// distinguishable from a malformed request) when no schema matches.
    pub fn get_schema(&self, id: &str) -> ScimResult<Arc<Schema>> {
        let registry = self.registry()?;
        registry
            .get_schema_by_id(id)
            .map(Arc::clone)
            .map_err(|_| ScimError::resource_not_found("Schema", id))
    }

    /// One page of the schema catalog.
    ///
    /// `filter`, `sort_by`, and `sort_order` are accepted for interface
    /// symmetry but do not alter the output; the catalog has no mutable
    /// ordering criteria.
    pub fn list_schemas(&self, query: &ListQuery) -> ScimResult<PartialListResponse<Arc<Schema>>> {
        let registry = self.registry()?;
        Ok(paginate(registry.get_all_schemas(), query))
    }

    fn schema_to_resource(schema: &Schema) -> ScimResult<Resource> {
        let mut data = serde_json::to_value(schema)?;
        data["schemas"] = json!([schema_uris::SCHEMA]);
        Ok(Resource::new("Schema", data))
    }
}

#[async_trait]
impl ResourceHandler for SchemaHandler {
    fn resource_type(&self) -> &str {
        "Schema"
    }

    async fn get_resource(&self, id: &str, context: &RequestContext) -> ScimResult<Resource> {
        debug!("[{}] get schema '{}'", context.request_id, id);
        let schema = self.get_schema(id)?;
        Self::schema_to_resource(&schema)
    }

    async fn list_resources(
        &self,
        query: &ListQuery,
        context: &RequestContext,
    ) -> ScimResult<PartialListResponse<Resource>> {
        debug!(
            "[{}] list schemas (startIndex={:?}, count={:?})",
            context.request_id, query.start_index, query.count
        );
        let page = self.list_schemas(query)?;
        let mut resources = Vec::with_capacity(page.resources.len());
        for schema in &page.resources {
            resources.push(Self::schema_to_resource(schema)?);
        }
        Ok(PartialListResponse::new(
            resources,
            page.total_results,
            page.start_index,
        ))
    }

    async fn create_resource(
        &self,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("Schema", "create"))
    }

    async fn update_resource(
        &self,
        _id: &str,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("Schema", "update"))
    }

    async fn delete_resource(&self, _id: &str, _context: &RequestContext) -> ScimResult<()> {
        // Categorically disallowed; whether the id exists is irrelevant.
        Err(ScimError::not_implemented("Schema", "delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::endpoint_paths;
    use crate::endpoints;
    use crate::testing::StubHandler;

    fn fixture() -> (Arc<ResourceTypeRegistry>, SchemaHandler) {
        let registry = endpoints::standard_registry(
            Arc::new(StubHandler::new("User")),
            Arc::new(StubHandler::new("Group")),
        )
        .expect("standard registry builds");
        let handler = SchemaHandler::for_registry(&registry);
        (registry, handler)
    }

    #[test]
    fn test_get_schema_by_urn() {
        let (_registry, handler) = fixture();
        let schema = handler.get_schema(schema_uris::USER).unwrap();
        assert_eq!(schema.schema_id(), Some(schema_uris::USER));
        assert_eq!(schema.name, "User");
    }

    #[test]
    fn test_get_unknown_schema_is_resource_not_found() {
        let (_registry, handler) = fixture();
        let error = handler.get_schema("nonExistingResource").unwrap_err();
        assert!(matches!(error, ScimError::ResourceNotFound { .. }));
        assert_eq!(error.http_status(), 404);
    }

    #[test]
    fn test_list_reports_full_total_on_every_window() {
        let (registry, handler) = fixture();
        let total = registry.get_all_schemas().len();
        for start_index in 1..=(total as u64 + 2) {
            let page = handler
                .list_schemas(&ListQuery::new().with_start_index(start_index).with_count(2))
                .unwrap();
            assert_eq!(page.total_results, total);
            assert!(page.resources.len() <= 2);
        }
    }

    #[test]
    fn test_filter_and_sort_are_accepted_without_effect() {
        let (_registry, handler) = fixture();
        let plain = handler.list_schemas(&ListQuery::new()).unwrap();
        let decorated = handler
            .list_schemas(
                &ListQuery::new()
                    .with_filter("name eq \"User\"")
                    .with_sort_by("name"),
            )
            .unwrap();
        let ids = |page: &PartialListResponse<Arc<Schema>>| {
            page.resources
                .iter()
                .filter_map(|schema| schema.schema_id().map(str::to_string))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&plain), ids(&decorated));
    }

    #[tokio::test]
    async fn test_trait_dispatch_through_registry_entry() {
        let (registry, _handler) = fixture();
        let entry = registry.get_resource_type(endpoint_paths::SCHEMAS).unwrap();
        let context = RequestContext::with_generated_id();

        let resource = entry
            .handler
            .get_resource(schema_uris::GROUP, &context)
            .await
            .unwrap();
        assert_eq!(resource.get_id(), Some(schema_uris::GROUP));
        assert_eq!(resource.data["schemas"][0], schema_uris::SCHEMA);

        let error = entry
            .handler
            .delete_resource("blubb", &context)
            .await
            .unwrap_err();
        assert!(error.is_not_implemented());
    }
}
