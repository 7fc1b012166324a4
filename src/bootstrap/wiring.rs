//! Assembles the catalog application from configuration.

use std::sync::Arc;

use anyhow::Context;
use ifly_app::{CatalogApp, CatalogAppBuilder};
use ifly_infra::{CatalogConfig, HttpListingsSource, TracingLoadDiagnostics};

/// Build the catalog application backed by the HTTP listings service.
pub fn build_catalog_app(config: &CatalogConfig) -> anyhow::Result<CatalogApp> {
    let source = HttpListingsSource::new(&config.endpoint, config.request_timeout())
        .with_context(|| format!("Failed to set up listings client for {}", config.endpoint))?;
    tracing::info!(
        url = %source.listings_url(),
        timeout_secs = ?config.request_timeout_secs,
        "Catalog listings source configured"
    );

    CatalogAppBuilder::new()
        .with_listings_source(Arc::new(source))
        .with_diagnostics(Arc::new(TracingLoadDiagnostics::new(config.endpoint.clone())))
        .build()
}
