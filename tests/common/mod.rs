//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use scim_registry::{
    ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler, ResourceType,
    ResourceTypeRegistry, ResourceTypeRegistryBuilder, Schema, ScimError, ScimResult, endpoints,
};
use serde_json::Value;
use std::sync::Arc;

/// Device schema used to bring the discovery catalog to seven documents
/// and to exercise extension sharing across resource types.
pub const DEVICE_SCHEMA_URI: &str = "urn:example:params:scim:schemas:custom:2.0:Device";

const DEVICE_SCHEMA_JSON: &str = r#"{
  "id": "urn:example:params:scim:schemas:custom:2.0:Device",
  "name": "Device",
  "description": "Managed device",
  "attributes": [
    {
      "name": "serialNumber",
      "type": "string",
      "multiValued": false,
      "required": true,
      "caseExact": true,
      "mutability": "immutable",
      "returned": "default",
      "uniqueness": "server"
    },
    {
      "name": "owner",
      "type": "reference",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite",
      "returned": "default"
    }
  ]
}"#;

/// Storage-less stand-in for a concrete CRUD handler.
pub struct TestHandler {
    resource_type: &'static str,
}

impl TestHandler {
    pub fn new(resource_type: &'static str) -> Arc<dyn ResourceHandler> {
        Arc::new(Self { resource_type })
    }
}

#[async_trait]
impl ResourceHandler for TestHandler {
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

/// Route handler logs through env_logger when RUST_LOG is set.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Registry with /Users, /Groups, and a custom /Devices endpoint that
/// shares the EnterpriseUser extension with /Users.
///
/// The resulting discovery catalog holds exactly seven schema documents:
/// User, EnterpriseUser, Group, Device, Schema, ResourceType, and
/// ServiceProviderConfig.
pub fn discovery_registry() -> Arc<ResourceTypeRegistry> {
    init_logging();
    let device = Arc::new(Schema::parse(DEVICE_SCHEMA_JSON).expect("device schema parses"));
    let enterprise = Arc::new(
        Schema::parse(scim_registry::schema::embedded::enterprise_user_schema())
            .expect("enterprise schema parses"),
    );

    let mut builder = ResourceTypeRegistryBuilder::new();
    builder
        .register(endpoints::user_endpoint(TestHandler::new("User")).expect("user endpoint"))
        .expect("register /Users");
    builder
        .register(endpoints::group_endpoint(TestHandler::new("Group")).expect("group endpoint"))
        .expect("register /Groups");
    builder
        .register(
            ResourceType::new("Device", "/Devices", device, TestHandler::new("Device"))
                .with_description("Managed device")
                .with_extension(enterprise, false),
        )
        .expect("register /Devices");
    builder.build().expect("registry builds")
}
