//! # ifly-core
//!
//! Core domain models and filtering rules for the Interfly catalog browser.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! The listings service is reached only through the ports in [`ports`].

pub mod catalog;
pub mod category;
pub mod filter;
pub mod ids;
pub mod listing;
pub mod navigation;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogState, CatalogStatus};
pub use category::{Category, CategoryTaxonomy};
pub use filter::{filter_listings, FilterCriteria, FilterError};
pub use ids::{CategoryId, ListingId};
pub use listing::{DisplayValue, Listing};
pub use navigation::DetailTarget;
