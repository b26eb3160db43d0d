//! The filterable projection of a directory entry.

use serde::Serialize;

/// One directory card as the filter sees it.
///
/// All fields are plain text. Data that is absent upstream arrives here as
/// an empty string rather than an `Option`, so the matching rules never
/// have to branch on presence. Cards are built once per page load and
/// never mutated afterwards; visibility is derived state that lives in a
/// [`FilterOutcome`](super::FilterOutcome), not on the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub address: String,
    pub category: String,
    /// Feature labels joined with single spaces.
    pub features: String,
    pub status: String,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        category: impl Into<String>,
        features: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            category: category.into(),
            features: features.into(),
            status: status.into(),
        }
    }

    /// Search corpus for keyword matching.
    ///
    /// Name, address, category and features joined with single spaces in
    /// that fixed order, then lower-cased. Status is deliberately not part
    /// of the corpus; it is only reachable through the status filter.
    pub fn corpus(&self) -> String {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.category.as_str(),
            self.features.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
