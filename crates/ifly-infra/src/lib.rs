pub mod config;
pub mod diagnostics;
pub mod http;

pub use config::CatalogConfig;
pub use diagnostics::TracingLoadDiagnostics;
pub use http::HttpListingsSource;
