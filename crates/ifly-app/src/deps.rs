//! Dependency grouping for [`CatalogApp`](crate::CatalogApp) construction.
//!
//! Just parameter grouping: no defaults, no build steps.

use std::sync::Arc;

use ifly_core::ports::{ListingsSourcePort, LoadDiagnosticsPort};
use ifly_core::CategoryTaxonomy;

/// Everything a mounted catalog view needs.
pub struct CatalogDeps {
    pub listings_source: Arc<dyn ListingsSourcePort>,
    pub diagnostics: Arc<dyn LoadDiagnosticsPort>,
    pub taxonomy: CategoryTaxonomy,
}
