//! Use case for fetching the listing collection once

use std::sync::Arc;

use ifly_core::ports::{ListingsSourcePort, LoadDiagnosticsPort};
use ifly_core::CatalogState;
use tracing::{info, info_span, Instrument};

/// Performs a single listings fetch and turns the outcome into a
/// [`CatalogState`].
///
/// Failures are reported to the diagnostics port and contained here: the
/// caller always receives a state, never an error.
pub struct LoadCatalog {
    source: Arc<dyn ListingsSourcePort>,
    diagnostics: Arc<dyn LoadDiagnosticsPort>,
}

impl LoadCatalog {
    pub fn new(
        source: Arc<dyn ListingsSourcePort>,
        diagnostics: Arc<dyn LoadDiagnosticsPort>,
    ) -> Self {
        Self {
            source,
            diagnostics,
        }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> CatalogState {
        let span = info_span!("usecase.load_catalog.execute");

        async {
            match self.source.fetch_listings().await {
                Ok(listings) => {
                    info!(count = listings.len(), "Catalog listings loaded");
                    CatalogState::loaded(listings)
                }
                Err(err) => {
                    self.diagnostics.load_failed(&err);
                    CatalogState::Failed(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
