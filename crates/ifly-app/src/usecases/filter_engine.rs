//! Search and category inputs of a catalog view

use ifly_core::{
    filter_listings, CategoryId, CategoryTaxonomy, DetailTarget, FilterCriteria, FilterError,
    Listing, ListingId,
};
use tracing::debug;

/// Owns the filter inputs and derives the filtered view on demand.
///
/// Nothing here touches the dataset or performs I/O; the dataset is passed in
/// by whoever owns it.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    taxonomy: CategoryTaxonomy,
    criteria: FilterCriteria,
    chosen: Option<ListingId>,
}

impl FilterEngine {
    /// New engine with an empty search term and the wildcard category.
    pub fn new(taxonomy: CategoryTaxonomy) -> Self {
        let criteria = FilterCriteria::new("", taxonomy.wildcard().id.clone());
        Self {
            taxonomy,
            criteria,
            chosen: None,
        }
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    pub fn search_term(&self) -> &str {
        self.criteria.search_term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.set_search_term(term);
        debug!(search_term = %self.criteria.search_term(), "Search term changed");
    }

    pub fn selected_category(&self) -> &CategoryId {
        self.criteria.category()
    }

    /// Select a category from the taxonomy.
    ///
    /// Ids outside the taxonomy are rejected and the previous selection is kept.
    pub fn select_category(&mut self, id: CategoryId) -> Result<(), FilterError> {
        if !self.taxonomy.contains(&id) {
            return Err(FilterError::UnknownCategory(id));
        }
        debug!(category = %id, "Category changed");
        self.criteria.set_category(id);
        Ok(())
    }

    /// Derive the filtered view of `dataset` for the current inputs.
    pub fn filtered_view(&self, dataset: &[Listing]) -> Vec<Listing> {
        filter_listings(dataset, &self.criteria)
    }

    /// Record `id` as the listing chosen for the detail view.
    pub fn choose_listing(&mut self, id: ListingId) -> DetailTarget {
        self.chosen = Some(id.clone());
        DetailTarget::new(id)
    }

    pub fn chosen_listing(&self) -> Option<&ListingId> {
        self.chosen.as_ref()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(CategoryTaxonomy::builtin())
    }
}
