//! Virtual, read-only resource handlers backed by the registry.
//!
//! These handlers implement the shared [`ResourceHandler`] contract for the
//! discovery endpoints. They are bound to a published registry and have no
//! mutable state; every mutating operation fails with `NotImplemented` by
//! design, not as a missing feature.
//!
//! [`ResourceHandler`]: crate::resource::ResourceHandler

pub mod resource_types;
pub mod schemas;
pub mod service_provider_config;

pub use resource_types::ResourceTypeHandler;
pub use schemas::SchemaHandler;
pub use service_provider_config::ServiceProviderConfigHandler;

use crate::resource::{ListQuery, PartialListResponse};

/// Slice one page out of an already-ordered result set.
///
/// `start_index` is 1-based per the SCIM protocol; the 0-based offset is
/// `start_index - 1`. Windows past the end of the set yield an empty page
/// rather than an error, short tails yield short pages, and
/// `total_results` always reports the full set size.
pub(crate) fn paginate<T: Clone>(items: &[T], query: &ListQuery) -> PartialListResponse<T> {
    let start_index = query.effective_start_index();
    let offset = (start_index - 1) as usize;
    let window = items.get(offset..).unwrap_or(&[]);
    let page = match query.count {
        Some(count) => &window[..window.len().min(count)],
        None => window,
    };
    PartialListResponse::new(page.to_vec(), items.len(), start_index)
}
