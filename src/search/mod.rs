pub mod catalog;
pub mod filter;
pub mod index;

pub use catalog::{SERVICES, STATIC_PAGES};
pub use filter::{filter_listings, ListingFilter, SortOrder};
pub use index::SiteSearch;
