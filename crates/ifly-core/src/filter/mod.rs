//! Catalog filtering rules
//!
//! The filtered view is a pure function of `(dataset, search term, category)`.
//! It keeps the dataset's relative order and never re-sorts.

mod error;

pub use error::FilterError;

use crate::ids::CategoryId;
use crate::listing::Listing;

/// The user-editable inputs of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    search_term: String,
    // Lowercased once per edit instead of once per listing.
    needle: String,
    category: CategoryId,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, category: CategoryId) -> Self {
        let search_term = search_term.into();
        Self {
            needle: search_term.to_lowercase(),
            search_term,
            category,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.needle = self.search_term.to_lowercase();
    }

    pub fn set_category(&mut self, category: CategoryId) {
        self.category = category;
    }

    /// Whether `listing` passes both the category and the text clause.
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.in_category(&self.category) && self.matches_text(listing)
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        listing.title.to_lowercase().contains(&self.needle)
            || listing.description.to_lowercase().contains(&self.needle)
    }
}

/// Derive the filtered view of `dataset`.
///
/// Returns the order-preserving subsequence of listings accepted by
/// [`FilterCriteria::matches`]. An empty result is a valid view, not an error.
pub fn filter_listings(dataset: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    dataset
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}
