//! Plain-text rendering of the catalog view.

use std::fmt::Write;

use ifly_app::models::{CategoryOptionDto, ListingCardDto};
use ifly_core::{CatalogStatus, Listing};

const RULE: &str = "----------------------------------------";

/// Category bar, selected entry in brackets.
pub fn category_bar(options: &[CategoryOptionDto]) -> String {
    options
        .iter()
        .map(|option| {
            if option.selected {
                format!("[{}]", option.name)
            } else {
                option.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One line per category: `<id>  <name>`.
pub fn category_list(options: &[CategoryOptionDto]) -> String {
    let width = options.iter().map(|o| o.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "{:width$}  {}", option.id, option.name);
    }
    out
}

pub fn card(card: &ListingCardDto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "{}", card.byline);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", card.description);
    if !card.technologies.is_empty() {
        let _ = writeln!(out, "{}", card.technologies.join(" · "));
    }
    let _ = writeln!(out, "{}  |  {}", card.completion_status, card.views_label);
    let _ = writeln!(out, "${}    details: {}", card.price, card.detail_route);
    out
}

pub fn cards(cards: &[ListingCardDto]) -> String {
    cards.iter().map(card).collect()
}

/// Notice shown above the cards; `None` when there is nothing to say.
pub fn status_notice(status: &CatalogStatus, shown: usize) -> Option<String> {
    match status {
        CatalogStatus::Loading => Some("Listings are still loading.".to_string()),
        CatalogStatus::Failed { .. } => {
            Some("Listings could not be loaded; showing an empty catalog.".to_string())
        }
        CatalogStatus::Ready { total: 0 } => Some("No projects are listed yet.".to_string()),
        CatalogStatus::Ready { .. } if shown == 0 => {
            Some("No projects match the current filters.".to_string())
        }
        CatalogStatus::Ready { .. } => None,
    }
}

/// Full detail view of one listing.
pub fn detail(listing: &Listing) -> String {
    let mut out = card(&ListingCardDto::from(listing));
    let category = if listing.category.is_empty() {
        "uncategorized"
    } else {
        listing.category.as_str()
    };
    let _ = writeln!(out, "id: {}  category: {category}", listing.id);
    out
}
