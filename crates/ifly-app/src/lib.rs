//! Interfly Application Orchestration Layer
//!
//! This crate contains the catalog use cases and the per-view session that
//! ties the one-shot load to the filter inputs.

pub mod builder;
pub mod deps;
pub mod models;
pub mod session;
pub mod usecases;

pub use builder::{CatalogApp, CatalogAppBuilder};
pub use deps::CatalogDeps;
pub use session::CatalogSession;
