//! A mounted catalog view
//!
//! Owns the raw dataset cell, the filter inputs and the single background
//! load. Filter edits are accepted at any time; until the load resolves they
//! run over an empty dataset.

use ifly_core::{
    CatalogState, CatalogStatus, CategoryId, CategoryTaxonomy, DetailTarget, FilterError, Listing,
    ListingId,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::{CategoryOptionDto, ListingCardDto};
use crate::usecases::{CatalogLoader, FilterEngine};

pub struct CatalogSession {
    catalog: watch::Receiver<CatalogState>,
    engine: FilterEngine,
    cancel: CancellationToken,
    load_task: Option<JoinHandle<()>>,
}

impl CatalogSession {
    /// Mount the view: create an empty dataset cell and start the load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(loader: CatalogLoader, taxonomy: CategoryTaxonomy) -> Self {
        let (publisher, catalog) = watch::channel(CatalogState::NotLoaded);
        let cancel = CancellationToken::new();
        let load_task = loader.spawn(publisher, cancel.clone());

        Self {
            catalog,
            engine: FilterEngine::new(taxonomy),
            cancel,
            load_task: Some(load_task),
        }
    }

    pub fn search_term(&self) -> &str {
        self.engine.search_term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.engine.set_search_term(term);
    }

    pub fn selected_category(&self) -> &CategoryId {
        self.engine.selected_category()
    }

    pub fn select_category(&mut self, id: CategoryId) -> Result<(), FilterError> {
        self.engine.select_category(id)
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        self.engine.taxonomy()
    }

    /// The filtered view over the dataset as it is right now.
    pub fn filtered_view(&self) -> Vec<Listing> {
        let state = self.catalog.borrow();
        self.engine.filtered_view(state.dataset())
    }

    pub fn cards(&self) -> Vec<ListingCardDto> {
        self.filtered_view().iter().map(ListingCardDto::from).collect()
    }

    pub fn category_options(&self) -> Vec<CategoryOptionDto> {
        let selected = self.engine.selected_category();
        self.engine
            .taxonomy()
            .iter()
            .map(|category| CategoryOptionDto::new(category, selected))
            .collect()
    }

    pub fn status(&self) -> CatalogStatus {
        self.catalog.borrow().status()
    }

    /// Number of listings in the raw dataset, regardless of the filter.
    pub fn total_listings(&self) -> usize {
        self.catalog.borrow().dataset().len()
    }

    /// Look up a listing of the raw dataset by id.
    pub fn listing(&self, id: &ListingId) -> Option<Listing> {
        self.catalog
            .borrow()
            .dataset()
            .iter()
            .find(|listing| &listing.id == id)
            .cloned()
    }

    /// Choose a listing for the detail view.
    pub fn view_details(&mut self, id: ListingId) -> DetailTarget {
        self.engine.choose_listing(id)
    }

    pub fn chosen_listing(&self) -> Option<&ListingId> {
        self.engine.chosen_listing()
    }

    /// Wait until the loader publishes a new dataset state.
    ///
    /// Returns `false` once the loader has finished without anything left to
    /// publish.
    pub async fn dataset_changed(&mut self) -> bool {
        self.catalog.changed().await.is_ok()
    }

    /// Wait for the load to resolve and return the resulting status.
    ///
    /// Returns immediately if it already resolved. Without a request timeout a
    /// hung listings service keeps this pending.
    pub async fn wait_until_settled(&mut self) -> CatalogStatus {
        while !self.catalog.borrow().is_settled() {
            if !self.dataset_changed().await {
                break;
            }
        }
        self.status()
    }

    /// Tear the view down, discarding any response still in flight.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.load_task.take() {
            if !task.is_finished() {
                debug!("Aborting outstanding catalog load");
                task.abort();
            }
        }
    }
}
