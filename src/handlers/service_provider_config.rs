//! Handler for the /ServiceProviderConfig endpoint.

use super::paginate;
use crate::error::{ScimError, ScimResult};
use crate::resource::{ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler};
use crate::service_provider::ServiceProviderConfig;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

/// Read-only handler serving the singleton service provider configuration.
///
/// The configuration has no id of its own; get ignores the requested id
/// and always returns the singleton, matching RFC 7644 §4 where the
/// endpoint is addressed without one.
#[derive(Debug)]
pub struct ServiceProviderConfigHandler {
    config: ServiceProviderConfig,
}

impl ServiceProviderConfigHandler {
    /// Create a handler serving the given configuration.
    pub fn new(config: ServiceProviderConfig) -> Self {
        Self { config }
    }

    /// The configuration this handler serves.
    pub fn config(&self) -> &ServiceProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ResourceHandler for ServiceProviderConfigHandler {
    fn resource_type(&self) -> &str {
        "ServiceProviderConfig"
    }

    async fn get_resource(&self, _id: &str, context: &RequestContext) -> ScimResult<Resource> {
        debug!("[{}] get service provider config", context.request_id);
        Ok(Resource::new(
            "ServiceProviderConfig",
            self.config.to_scim_json()?,
        ))
    }

    async fn list_resources(
        &self,
        query: &ListQuery,
        context: &RequestContext,
    ) -> ScimResult<PartialListResponse<Resource>> {
        debug!("[{}] list service provider config", context.request_id);
        let singleton = [self.config.to_scim_json()?];
        Ok(paginate(&singleton, query).map(|data| Resource::new("ServiceProviderConfig", data)))
    }

    async fn create_resource(
        &self,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("ServiceProviderConfig", "create"))
    }

    async fn update_resource(
        &self,
        _id: &str,
        _data: Value,
        _context: &RequestContext,
    ) -> ScimResult<Resource> {
        Err(ScimError::not_implemented("ServiceProviderConfig", "update"))
    }

    async fn delete_resource(&self, _id: &str, _context: &RequestContext) -> ScimResult<()> {
        Err(ScimError::not_implemented("ServiceProviderConfig", "delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::schema_uris;
    use crate::service_provider::SupportedFeature;

    #[tokio::test]
    async fn test_get_ignores_requested_id() {
        let handler = ServiceProviderConfigHandler::new(ServiceProviderConfig {
            patch: SupportedFeature::supported(),
            ..Default::default()
        });
        let context = RequestContext::with_generated_id();

        let resource = handler.get_resource("anything", &context).await.unwrap();
        assert_eq!(
            resource.data["schemas"][0],
            schema_uris::SERVICE_PROVIDER_CONFIG
        );
        assert_eq!(resource.data["patch"]["supported"], true);
    }

    #[tokio::test]
    async fn test_list_is_a_singleton_page() {
        let handler = ServiceProviderConfigHandler::new(ServiceProviderConfig::default());
        let context = RequestContext::with_generated_id();

        let page = handler
            .list_resources(&ListQuery::new(), &context)
            .await
            .unwrap();
        assert_eq!(page.total_results, 1);
        assert_eq!(page.resources.len(), 1);
    }

    #[tokio::test]
    async fn test_mutations_rejected() {
        let handler = ServiceProviderConfigHandler::new(ServiceProviderConfig::default());
        let context = RequestContext::with_generated_id();

        assert!(
            handler
                .update_resource("x", serde_json::json!({}), &context)
                .await
                .unwrap_err()
                .is_not_implemented()
        );
    }
}
