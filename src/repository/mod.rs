pub mod local;
pub mod memory;
pub mod rest;
pub mod traits;

pub use local::LocalListingStore;
pub use memory::MemoryListingRepository;
pub use rest::RestListingRepository;
pub use traits::ListingRepository;

use crate::models::Listing;

/// Next free id: one past the largest id in use, starting at 1
pub(crate) fn next_id(listings: &[Listing]) -> i64 {
    listings.iter().map(|l| l.id).max().unwrap_or(0) + 1
}

/// Order listings the way the remote store returns them
pub(crate) fn sort_newest_first(listings: &mut [Listing]) {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
