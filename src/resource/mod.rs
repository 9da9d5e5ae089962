//! Resource model and the shared handler contract.
//!
//! This module defines the type-erased resource representation exchanged by
//! handlers, the request/query types, the paginated list envelope, and the
//! [`ResourceHandler`] capability trait implemented by every endpoint
//! handler, whether it supports mutation or not.

pub mod context;
pub mod handler;
pub mod resource;
pub mod response;

pub use context::{ListQuery, RequestContext, SortOrder};
pub use handler::ResourceHandler;
pub use resource::Resource;
pub use response::PartialListResponse;
