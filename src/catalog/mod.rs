//! The listing catalog: records, CSV import, and slugs.

pub mod import;
pub mod record;
pub mod slug;

pub use import::import_csv;
pub use record::Listing;
pub use slug::{SlugRegistry, slugify};

use std::collections::BTreeSet;

use crate::filter::Card;

/// Every listing from one import, in source-row order.
///
/// Row order is preserved end-to-end: these listings render into the index
/// page in the same order, and filter outcomes index into them positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub listings: Vec<Listing>,
    /// Data rows the importer looked at.
    pub rows_read: usize,
    /// Rows dropped for being unreadable or too short.
    pub rows_skipped: usize,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Filterable projections of every listing, in catalog order.
    pub fn cards(&self) -> Vec<Card> {
        self.listings.iter().map(Listing::card).collect()
    }

    /// Sorted distinct non-empty categories, for the category select.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.listings.iter().map(|l| l.category.as_str()))
    }

    /// Sorted distinct non-empty statuses, for the status select.
    pub fn statuses(&self) -> Vec<String> {
        distinct(self.listings.iter().filter_map(|l| l.status.as_deref()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
