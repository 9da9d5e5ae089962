//! Request context and query structures for SCIM operations.

use uuid::Uuid;

/// Request context for SCIM operations.
///
/// Provides request tracking for logging and auditing purposes. The core
/// itself makes no logging decisions; it only threads the context through.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: String) -> Self {
        Self { request_id }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order
    #[default]
    Ascending,
    /// Descending order
    Descending,
}

/// Query parameters for listing resources.
///
/// Pagination follows the SCIM protocol convention: `start_index` is
/// 1-based, `count` is the maximum page size. Filter and sort parameters
/// are carried for interface symmetry; handlers over immutable catalogs
/// accept them without effect.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// 1-based index of the first result to return
    pub start_index: Option<u64>,
    /// Maximum number of results to return
    pub count: Option<usize>,
    /// Filter expression
    pub filter: Option<String>,
    /// Attribute to sort by
    pub sort_by: Option<String>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    /// Create a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based starting index.
    pub fn with_start_index(mut self, start_index: u64) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Set the maximum count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set a filter expression.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sort attribute.
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Set the sort direction.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Effective 1-based start index.
    ///
    /// Values below 1 are clamped to 1, matching RFC 7644 §3.4.2.4.
    pub fn effective_start_index(&self) -> u64 {
        self.start_index.unwrap_or(1).max(1)
    }
}
