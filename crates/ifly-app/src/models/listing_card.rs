//! View models handed to the presentation layer

use ifly_core::{Category, CategoryId, DetailTarget, Listing};
use serde::Serialize;

/// DTO for one listing card (returned to the presentation layer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCardDto {
    pub id: String,
    pub title: String,
    /// "by <seller>"
    pub byline: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub completion_status: String,
    pub views_label: String,
    pub price: String,
    pub detail_route: String,
}

impl From<&Listing> for ListingCardDto {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            title: listing.title.clone(),
            byline: format!("by {}", listing.seller),
            description: listing.description.clone(),
            technologies: listing.technologies.clone(),
            completion_status: listing.completion_status.to_string(),
            views_label: format!("{} views", listing.views),
            price: listing.price.to_string(),
            detail_route: DetailTarget::new(listing.id.clone()).route(),
        }
    }
}

/// One button of the category bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOptionDto {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl CategoryOptionDto {
    pub fn new(category: &Category, selected: &CategoryId) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            selected: &category.id == selected,
        }
    }
}
