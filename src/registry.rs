//! Resource type registry: the single source of truth for which resource
//! types and schemas exist.
//!
//! The registry is built once during a single-threaded bootstrap phase via
//! [`ResourceTypeRegistryBuilder`] and then published as an immutable
//! `Arc<ResourceTypeRegistry>`. After publication it holds no locks and is
//! safe for arbitrary concurrent readers; there is no mutation path.

use crate::constants::{endpoint_paths, schema_uris};
use crate::error::{ScimError, ScimResult};
use crate::handlers::{ResourceTypeHandler, SchemaHandler, ServiceProviderConfigHandler};
use crate::resource::ResourceHandler;
use crate::schema::{Schema, embedded};
use crate::service_provider::ServiceProviderConfig;
use log::debug;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

/// A schema extension attached to a resource type.
#[derive(Clone)]
pub struct SchemaExtension {
    /// The extension schema document
    pub schema: Arc<Schema>,
    /// Whether resources of this type must carry the extension
    pub required: bool,
}

/// A registered resource type.
///
/// Binds an endpoint path to a primary schema document, zero or more
/// schema extensions, and the handler that serves the endpoint's CRUD
/// operations. The same schema document may be referenced as an extension
/// by multiple resource types; discovery deduplicates by URN.
#[derive(Clone)]
pub struct ResourceType {
    /// Resource type name (e.g., "User"); doubles as its discovery id
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Unique endpoint path (e.g., "/Users")
    pub endpoint: String,
    /// Primary schema document
    pub schema: Arc<Schema>,
    /// Extension schema documents, in registration order
    pub schema_extensions: Vec<SchemaExtension>,
    /// The handler serving this endpoint
    pub handler: Arc<dyn ResourceHandler>,
}

impl std::fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceType")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("schema", &self.schema.id)
            .field("schema_extensions", &self.schema_extensions.len())
            .finish()
    }
}

impl ResourceType {
    /// Create a resource type definition.
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        schema: Arc<Schema>,
        handler: Arc<dyn ResourceHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            endpoint: endpoint.into(),
            schema,
            schema_extensions: Vec::new(),
            handler,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a schema extension.
    pub fn with_extension(mut self, schema: Arc<Schema>, required: bool) -> Self {
        self.schema_extensions.push(SchemaExtension { schema, required });
        self
    }

    /// All schema documents referenced by this resource type, primary first.
    pub fn all_schemas(&self) -> impl Iterator<Item = &Arc<Schema>> {
        std::iter::once(&self.schema).chain(self.schema_extensions.iter().map(|ext| &ext.schema))
    }

    /// RFC 7643 §6 wire representation of this resource type.
    pub fn to_scim_json(&self) -> Value {
        let extensions: Vec<Value> = self
            .schema_extensions
            .iter()
            .map(|ext| {
                json!({
                    "schema": ext.schema.schema_id(),
                    "required": ext.required,
                })
            })
            .collect();

        let mut value = json!({
            "schemas": [schema_uris::RESOURCE_TYPE],
            "id": self.name,
            "name": self.name,
            "endpoint": self.endpoint,
            "schema": self.schema.schema_id(),
            "meta": {
                "resourceType": "ResourceType",
                "location": format!("{}/{}", endpoint_paths::RESOURCE_TYPES, self.name),
            },
        });
        if let Some(description) = &self.description {
            value["description"] = json!(description);
        }
        if !extensions.is_empty() {
            value["schemaExtensions"] = Value::Array(extensions);
        }
        value
    }
}

/// Immutable table of registered resource types and their schemas.
///
/// Holds entries in registration order together with the derived,
/// deduplicated schema list. The schema list order is the first-appearance
/// order across entries, which makes discovery enumeration deterministic
/// for a fixed registry instance.
pub struct ResourceTypeRegistry {
    resource_types: Vec<ResourceType>,
    by_endpoint: HashMap<String, usize>,
    schemas: Vec<Arc<Schema>>,
    by_schema_id: HashMap<String, usize>,
    service_provider_config: ServiceProviderConfig,
}

impl std::fmt::Debug for ResourceTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceTypeRegistry")
            .field("resource_types", &self.resource_types)
            .field("schemas", &self.schemas.len())
            .finish()
    }
}

impl ResourceTypeRegistry {
    /// Get the resource type registered under an endpoint path.
    pub fn get_resource_type(&self, endpoint: &str) -> ScimResult<&ResourceType> {
        self.by_endpoint
            .get(endpoint)
            .map(|&index| &self.resource_types[index])
            .ok_or_else(|| ScimError::ResourceTypeNotFound {
                endpoint: endpoint.to_string(),
            })
    }

    /// All registered resource types, in registration order.
    pub fn resource_types(&self) -> &[ResourceType] {
        &self.resource_types
    }

    /// The deduplicated set of all schema documents reachable from any
    /// registered resource type, in first-appearance order.
    pub fn get_all_schemas(&self) -> &[Arc<Schema>] {
        &self.schemas
    }

    /// Look up a schema document by its URN.
    pub fn get_schema_by_id(&self, schema_id: &str) -> ScimResult<&Arc<Schema>> {
        self.by_schema_id
            .get(schema_id)
            .map(|&index| &self.schemas[index])
            .ok_or_else(|| ScimError::schema_not_found(schema_id))
    }

    /// The service provider configuration published through discovery.
    pub fn service_provider_config(&self) -> &ServiceProviderConfig {
        &self.service_provider_config
    }

    fn empty(service_provider_config: ServiceProviderConfig) -> Self {
        Self {
            resource_types: Vec::new(),
            by_endpoint: HashMap::new(),
            schemas: Vec::new(),
            by_schema_id: HashMap::new(),
            service_provider_config,
        }
    }

    // Endpoint uniqueness and schema id presence are validated by the
    // builder before this runs.
    fn insert(&mut self, resource_type: ResourceType) {
        debug!(
            "registering resource type '{}' at '{}'",
            resource_type.name, resource_type.endpoint
        );
        for schema in resource_type.all_schemas() {
            let Some(id) = schema.schema_id() else {
                debug_assert!(false, "builder admitted an id-less schema");
                continue;
            };
            if !self.by_schema_id.contains_key(id) {
                self.by_schema_id.insert(id.to_string(), self.schemas.len());
                self.schemas.push(Arc::clone(schema));
            }
        }
        let previous = self
            .by_endpoint
            .insert(resource_type.endpoint.clone(), self.resource_types.len());
        debug_assert!(previous.is_none(), "builder admitted a duplicate endpoint");
        self.resource_types.push(resource_type);
    }
}

/// Builder for the resource type registry.
///
/// Collects resource type definitions during bootstrap, failing fast on
/// conflicts, and publishes the immutable registry with [`build`]. The
/// build step appends the three virtual discovery endpoints (/Schemas,
/// /ResourceTypes, /ServiceProviderConfig) whose handlers are wired back
/// to the registry they live in.
///
/// [`build`]: ResourceTypeRegistryBuilder::build
///
/// # Example
/// ```rust,no_run
/// use scim_registry::{endpoints, ResourceTypeRegistryBuilder};
/// # use scim_registry::ScimResult;
/// # fn bootstrap(user_handler: std::sync::Arc<dyn scim_registry::ResourceHandler>)
/// #     -> ScimResult<()> {
/// let mut builder = ResourceTypeRegistryBuilder::new();
/// builder.register(endpoints::user_endpoint(user_handler)?)?;
/// let registry = builder.build()?;
/// assert!(registry.get_resource_type("/Users").is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ResourceTypeRegistryBuilder {
    resource_types: Vec<ResourceType>,
    service_provider_config: ServiceProviderConfig,
}

impl ResourceTypeRegistryBuilder {
    /// Create an empty builder with the default service provider config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service provider configuration served at
    /// /ServiceProviderConfig.
    pub fn with_service_provider_config(mut self, config: ServiceProviderConfig) -> Self {
        self.service_provider_config = config;
        self
    }

    /// Register a resource type.
    ///
    /// Fails with [`ScimError::DuplicateEndpoint`] if the endpoint path is
    /// already taken (including the reserved discovery paths), with
    /// [`ScimError::DuplicatePrimarySchema`] if another entry already uses
    /// the same primary schema URN, and with [`ScimError::MissingSchemaId`]
    /// if any referenced schema document carries no id. Registration
    /// failures are fatal to bootstrap.
    pub fn register(&mut self, resource_type: ResourceType) -> ScimResult<()> {
        for schema in resource_type.all_schemas() {
            if schema.schema_id().is_none() {
                return Err(ScimError::MissingSchemaId {
                    name: schema.name.clone(),
                });
            }
        }

        let reserved = [
            endpoint_paths::SCHEMAS,
            endpoint_paths::RESOURCE_TYPES,
            endpoint_paths::SERVICE_PROVIDER_CONFIG,
        ];
        if reserved.contains(&resource_type.endpoint.as_str())
            || self
                .resource_types
                .iter()
                .any(|existing| existing.endpoint == resource_type.endpoint)
        {
            return Err(ScimError::DuplicateEndpoint {
                endpoint: resource_type.endpoint.clone(),
            });
        }

        let primary_id = resource_type.schema.schema_id().unwrap_or_default();
        if let Some(existing) = self
            .resource_types
            .iter()
            .find(|existing| existing.schema.schema_id() == Some(primary_id))
        {
            return Err(ScimError::DuplicatePrimarySchema {
                schema_id: primary_id.to_string(),
                endpoint: existing.endpoint.clone(),
            });
        }

        self.resource_types.push(resource_type);
        Ok(())
    }

    /// Publish the immutable registry.
    ///
    /// Appends the virtual discovery endpoints after all concrete entries,
    /// so the derived schema order is: concrete schemas in registration
    /// order, then the discovery meta-schemas.
    pub fn build(self) -> ScimResult<Arc<ResourceTypeRegistry>> {
        let schema_meta = Arc::new(Schema::parse(embedded::schema_meta_schema())?);
        let resource_type_meta = Arc::new(Schema::parse(embedded::resource_type_schema())?);
        let config_meta = Arc::new(Schema::parse(embedded::service_provider_config_schema())?);

        let registry = Arc::new_cyclic(|weak| {
            let mut registry = ResourceTypeRegistry::empty(self.service_provider_config.clone());
            for resource_type in self.resource_types {
                registry.insert(resource_type);
            }

            registry.insert(
                ResourceType::new(
                    "Schema",
                    endpoint_paths::SCHEMAS,
                    schema_meta,
                    Arc::new(SchemaHandler::new(weak.clone())),
                )
                .with_description("Schema definitions supported by this service provider"),
            );
            registry.insert(
                ResourceType::new(
                    "ResourceType",
                    endpoint_paths::RESOURCE_TYPES,
                    resource_type_meta,
                    Arc::new(ResourceTypeHandler::new(weak.clone())),
                )
                .with_description("Resource types supported by this service provider"),
            );
            registry.insert(
                ResourceType::new(
                    "ServiceProviderConfig",
                    endpoint_paths::SERVICE_PROVIDER_CONFIG,
                    config_meta,
                    Arc::new(ServiceProviderConfigHandler::new(
                        self.service_provider_config,
                    )),
                )
                .with_description("Configuration of this service provider"),
            );
            registry
        });

        debug!(
            "published registry with {} resource types and {} schemas",
            registry.resource_types.len(),
            registry.schemas.len()
        );
        Ok(registry)
    }
}
