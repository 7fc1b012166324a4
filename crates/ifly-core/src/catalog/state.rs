use std::sync::Arc;

use serde::Serialize;

use crate::listing::Listing;
use crate::ports::FetchError;

/// Lifecycle of the raw dataset of one mounted view.
///
/// Starts as `NotLoaded` and moves at most once to `Loaded` or `Failed`.
/// Whatever the state, [`CatalogState::dataset`] yields a sequence the filter
/// can run over; a failure is never handed to the filter as an error value.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// No response yet (the load may still be in flight).
    #[default]
    NotLoaded,
    /// The service answered with a decodable listing array, kept verbatim.
    Loaded(Arc<Vec<Listing>>),
    /// The single load attempt failed; the dataset stays empty.
    Failed(FetchError),
}

impl CatalogState {
    pub fn loaded(listings: Vec<Listing>) -> Self {
        Self::Loaded(Arc::new(listings))
    }

    /// The raw dataset visible to the filter.
    pub fn dataset(&self) -> &[Listing] {
        match self {
            Self::Loaded(listings) => listings.as_slice(),
            Self::NotLoaded | Self::Failed(_) => &[],
        }
    }

    /// Whether the load has resolved, successfully or not.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::NotLoaded)
    }

    pub fn status(&self) -> CatalogStatus {
        match self {
            Self::NotLoaded => CatalogStatus::Loading,
            Self::Loaded(listings) => CatalogStatus::Ready {
                total: listings.len(),
            },
            Self::Failed(err) => CatalogStatus::Failed {
                reason: err.to_string(),
            },
        }
    }
}

/// Presentation-facing summary of [`CatalogState`].
///
/// Keeps "loaded with zero listings" and "load failed" apart so a view can
/// tell the user which one happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CatalogStatus {
    Loading,
    Ready { total: usize },
    Failed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_loaded_exposes_empty_dataset() {
        let state = CatalogState::default();

        assert!(state.dataset().is_empty());
        assert!(!state.is_settled());
        assert_eq!(state.status(), CatalogStatus::Loading);
    }

    #[test]
    fn test_failed_exposes_empty_dataset() {
        let state = CatalogState::Failed(FetchError::Transport("connection refused".into()));

        assert!(state.dataset().is_empty());
        assert!(state.is_settled());
        assert!(matches!(state.status(), CatalogStatus::Failed { reason } if reason.contains("connection refused")));
    }

    #[test]
    fn test_loaded_empty_is_ready_not_failed() {
        let state = CatalogState::loaded(Vec::new());
        assert_eq!(state.status(), CatalogStatus::Ready { total: 0 });
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let json = serde_json::to_value(CatalogStatus::Ready { total: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ready", "total": 3 }));
    }
}
