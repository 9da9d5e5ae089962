//! Schema document model for SCIM resources.
//!
//! This module provides the RFC 7643 schema data structures and the
//! embedded core schema documents used to register the standard endpoints.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema definition with attributes and metadata
//! - [`AttributeDefinition`] - Individual attribute specifications
//!
//! # Examples
//!
//! ```rust
//! use scim_registry::schema::{embedded, Schema};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let user = Schema::parse(embedded::user_schema())?;
//! assert_eq!(user.name, "User");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod types;

pub use types::{
    AttributeDefinition, AttributeType, Meta, Mutability, Returned, Schema, Uniqueness,
};
