//! Paginated list response envelope.

use crate::constants::schema_uris;
use serde::Serialize;

/// Paginated result envelope for list operations.
///
/// Mirrors the RFC 7644 ListResponse shape so the transport layer can
/// serialize every resource list endpoint uniformly, including the
/// ListResponse message URN in the `schemas` declaration. `total_results`
/// always reports the full size of the underlying set, independent of the
/// requested window.
#[derive(Debug, Clone, Serialize)]
pub struct PartialListResponse<T> {
    #[serde(rename = "schemas")]
    schemas: [&'static str; 1],
    /// The page of resources
    #[serde(rename = "Resources")]
    pub resources: Vec<T>,
    /// Total number of results across all pages
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    /// 1-based index of the first returned result
    #[serde(rename = "startIndex")]
    pub start_index: u64,
    /// Number of results in this page
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: usize,
}

impl<T> PartialListResponse<T> {
    /// Create a response for one page of results.
    ///
    /// `items_per_page` is derived from the page itself, per RFC 7644.
    pub fn new(resources: Vec<T>, total_results: usize, start_index: u64) -> Self {
        let items_per_page = resources.len();
        Self {
            schemas: [schema_uris::LIST_RESPONSE],
            resources,
            total_results,
            start_index,
            items_per_page,
        }
    }

    /// Map the resources of this page, preserving pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PartialListResponse<U> {
        PartialListResponse {
            schemas: self.schemas,
            resources: self.resources.into_iter().map(f).collect(),
            total_results: self.total_results,
            start_index: self.start_index,
            items_per_page: self.items_per_page,
        }
    }
}
