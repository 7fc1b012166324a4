//! Catalog use cases
//!
//! [CatalogSession::mount]
//         ↓
// CatalogLoader (spawned once per mount)
//         ↓
// LoadCatalog → ListingsSourcePort / LoadDiagnosticsPort
// ---------------------------------
// FilterEngine ← search / category edits from the view

pub mod catalog_loader;
pub mod filter_engine;
pub mod load_catalog;

pub use catalog_loader::CatalogLoader;
pub use filter_engine::FilterEngine;
pub use load_catalog::LoadCatalog;
