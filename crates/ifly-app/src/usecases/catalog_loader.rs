//! One-shot background load of the catalog for a mounted view

use ifly_core::CatalogState;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::LoadCatalog;

/// Runs [`LoadCatalog`] exactly once in the background.
///
/// [`CatalogLoader::spawn`] consumes the loader, so a second load for the same
/// view cannot be started. The result is published into the view's dataset
/// cell unless the view was torn down in the meantime.
pub struct CatalogLoader {
    load: LoadCatalog,
}

impl CatalogLoader {
    pub fn new(load: LoadCatalog) -> Self {
        Self { load }
    }

    /// Start the load on the current tokio runtime.
    ///
    /// The response is discarded when `cancel` fires first, or when every
    /// reader of `publisher` is gone by the time it arrives.
    pub fn spawn(
        self,
        publisher: watch::Sender<CatalogState>,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let state = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Catalog view torn down before listings arrived");
                    return;
                }
                state = self.load.execute() => state,
            };

            if cancel.is_cancelled() || publisher.is_closed() {
                debug!("Discarding catalog load result for a torn down view");
                return;
            }

            publisher.send_replace(state);
        })
    }
}
