//! Active filter selections.

use serde::Serialize;

/// The three filter inputs as last read from their sources.
///
/// Empty strings mean "no constraint on this dimension", so the `Default`
/// state matches every card. The query is free text; status and category
/// are discrete values drawn from the catalog itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub query: String,
    pub status: String,
    pub category: String,
}

impl FilterState {
    pub fn new(
        query: impl Into<String>,
        status: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            status: status.into(),
            category: category.into(),
        }
    }

    /// State with only a free-text query.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self::new(query, "", "")
    }

    /// True when no dimension constrains anything.
    ///
    /// The query counts as empty when it is all whitespace, matching how
    /// evaluation normalizes it.
    pub fn is_noop(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_empty() && self.category.is_empty()
    }
}
