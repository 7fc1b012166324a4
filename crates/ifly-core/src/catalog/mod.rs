//! Catalog dataset lifecycle

mod state;

pub use state::{CatalogState, CatalogStatus};
