//! SCIM 2.0 resource type registry and schema discovery for Rust.
//!
//! Provides the registry of resource types and schemas a SCIM service
//! supports, together with the read-only discovery handlers that expose
//! them per RFC 7644 §4: /Schemas, /ResourceTypes, and
//! /ServiceProviderConfig. The registry is built once during bootstrap and
//! published as an immutable value, safe for unsynchronized concurrent
//! reads; HTTP transport, storage, and authentication live in surrounding
//! layers.
//!
//! # Core Components
//!
//! - [`ResourceTypeRegistry`] - immutable table of resource types and
//!   their deduplicated schema documents
//! - [`ResourceTypeRegistryBuilder`] - bootstrap-time registration
//! - [`SchemaHandler`] - paginated, read-only schema discovery
//! - [`ResourceHandler`] - the CRUD capability trait every endpoint
//!   handler implements
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scim_registry::{endpoints, ListQuery, ResourceTypeRegistryBuilder, SchemaHandler};
//! # use std::sync::Arc;
//! # fn example(user_handler: Arc<dyn scim_registry::ResourceHandler>)
//! #     -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = ResourceTypeRegistryBuilder::new();
//! builder.register(endpoints::user_endpoint(user_handler)?)?;
//! let registry = builder.build()?;
//!
//! let discovery = SchemaHandler::for_registry(&registry);
//! let page = discovery.list_schemas(&ListQuery::new().with_count(10))?;
//! println!("schemas: {} of {}", page.items_per_page, page.total_results);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod service_provider;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use error::{ScimError, ScimResult};
pub use handlers::{ResourceTypeHandler, SchemaHandler, ServiceProviderConfigHandler};
pub use registry::{
    ResourceType, ResourceTypeRegistry, ResourceTypeRegistryBuilder, SchemaExtension,
};
pub use resource::{
    ListQuery, PartialListResponse, RequestContext, Resource, ResourceHandler, SortOrder,
};
pub use schema::{AttributeDefinition, AttributeType, Mutability, Returned, Schema, Uniqueness};
pub use service_provider::{AuthenticationScheme, ServiceProviderConfig};
