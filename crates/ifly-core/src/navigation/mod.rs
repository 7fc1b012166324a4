//! Detail-view hand-off
//!
//! Choosing a listing is a pure mapping from its id to a target; performing
//! the navigation belongs to the presentation layer.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::ids::ListingId;

/// Request to show the detail view of one listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetailTarget {
    pub listing_id: ListingId,
}

impl DetailTarget {
    pub fn new(listing_id: ListingId) -> Self {
        Self { listing_id }
    }

    /// Route path of the detail view.
    pub fn route(&self) -> String {
        format!("/projects/{}", self.listing_id)
    }
}

impl Display for DetailTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.route())
    }
}
