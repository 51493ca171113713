//! Equality queries over document fields.

use super::Document;
use serde_json::Value;

/// Equality predicate on a dotted field path.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    path: String,
    value: Value,
}

impl FieldFilter {
    /// Creates an equality filter.
    #[must_use]
    pub fn eq(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Returns the filtered field path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the expected value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns whether the document satisfies this filter.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        document.field(&self.path) == Some(&self.value)
    }
}

/// Conjunction of equality filters with an optional result cap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filters: Vec<FieldFilter>,
    limit: Option<usize>,
}

impl Query {
    /// Creates a query matching every document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality filter.
    #[must_use]
    pub fn where_eq(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter::eq(path, value));
        self
    }

    /// Caps the number of returned documents.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the filters.
    #[must_use]
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// Returns the result cap, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns whether the document satisfies every filter.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.filters.iter().all(|filter| filter.matches(document))
    }
}
