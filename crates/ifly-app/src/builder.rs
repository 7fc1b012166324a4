use std::sync::Arc;

use ifly_core::ports::{ListingsSourcePort, LoadDiagnosticsPort};
use ifly_core::CategoryTaxonomy;

use crate::session::CatalogSession;
use crate::usecases::{CatalogLoader, LoadCatalog};
use crate::CatalogDeps;

/// Builder for assembling the catalog application.
pub struct CatalogAppBuilder {
    listings_source: Option<Arc<dyn ListingsSourcePort>>,
    diagnostics: Option<Arc<dyn LoadDiagnosticsPort>>,
}

impl Default for CatalogAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogAppBuilder {
    pub fn new() -> Self {
        Self {
            listings_source: None,
            diagnostics: None,
        }
    }

    pub fn with_listings_source(mut self, source: Arc<dyn ListingsSourcePort>) -> Self {
        self.listings_source = Some(source);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn LoadDiagnosticsPort>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn build(self) -> anyhow::Result<CatalogApp> {
        Ok(CatalogApp::new(CatalogDeps {
            listings_source: self
                .listings_source
                .ok_or_else(|| anyhow::anyhow!("ListingsSourcePort is required"))?,
            diagnostics: self
                .diagnostics
                .ok_or_else(|| anyhow::anyhow!("LoadDiagnosticsPort is required"))?,
            taxonomy: CategoryTaxonomy::builtin(),
        }))
    }
}

/// The assembled catalog application.
///
/// Holds the shared ports; each call to [`CatalogApp::mount`] creates an
/// independent view session with its own dataset and filter inputs.
pub struct CatalogApp {
    deps: CatalogDeps,
}

impl CatalogApp {
    pub fn new(deps: CatalogDeps) -> Self {
        Self { deps }
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.deps.taxonomy
    }

    /// Mount a catalog view, starting its single listings load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) -> CatalogSession {
        let load = LoadCatalog::new(
            self.deps.listings_source.clone(),
            self.deps.diagnostics.clone(),
        );
        CatalogSession::mount(CatalogLoader::new(load), self.deps.taxonomy.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_listings_source() {
        let result = CatalogAppBuilder::new().build();

        assert!(result.is_err());
        assert!(result
            .err()
            .map(|e| e.to_string().contains("ListingsSourcePort"))
            .unwrap_or(false));
    }
}
