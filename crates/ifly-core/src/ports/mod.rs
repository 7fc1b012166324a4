//! Port interfaces for the application layer
//!
//! Ports define the contract between the catalog use cases and the
//! infrastructure that talks to the listings service or the log sink.

pub mod errors;
mod listings_source;
mod load_diagnostics;

pub use errors::FetchError;
pub use listings_source::ListingsSourcePort;
pub use load_diagnostics::LoadDiagnosticsPort;
