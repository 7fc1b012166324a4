use crate::listing::Listing;
use crate::ports::FetchError;

/// Source of the full listing collection.
#[async_trait::async_trait]
pub trait ListingsSourcePort: Send + Sync {
    /// Fetch every listing in service order.
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError>;
}
