//! ID type wrappers for type safety.

pub mod category_id;
pub mod listing_id;

pub use category_id::CategoryId;
pub use listing_id::ListingId;
