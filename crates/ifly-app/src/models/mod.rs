pub mod listing_card;

pub use listing_card::{CategoryOptionDto, ListingCardDto};
