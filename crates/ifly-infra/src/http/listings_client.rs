//! HTTP client for the listings service.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use ifly_core::ports::{FetchError, ListingsSourcePort};
use ifly_core::Listing;
use reqwest::Client;
use tracing::debug;

/// Path of the listing collection under the endpoint base.
const LISTINGS_PATH: &str = "/projects";

/// [`ListingsSourcePort`] backed by `GET <endpoint>/projects`.
pub struct HttpListingsSource {
    client: Client,
    base_url: String,
}

impl HttpListingsSource {
    /// Creates a listings client for `endpoint`.
    ///
    /// Without `timeout` a request may wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn listings_url(&self) -> String {
        format!("{}{LISTINGS_PATH}", self.base_url)
    }
}

#[async_trait]
impl ListingsSourcePort for HttpListingsSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        let url = self.listings_url();
        debug!(url = %url, "Requesting catalog listings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
