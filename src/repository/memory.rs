use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Listing, ListingFields};
use crate::repository::traits::ListingRepository;
use crate::repository::{next_id, sort_newest_first};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

/// Listings held in process memory
#[derive(Debug, Default)]
pub struct MemoryListingRepository {
    listings: RwLock<Vec<Listing>>,
}

impl MemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }
}

#[async_trait]
impl ListingRepository for MemoryListingRepository {
    async fn list(&self) -> RepositoryResult<Vec<Listing>> {
        let mut listings = self.listings.read().await.clone();
        sort_newest_first(&mut listings);
        Ok(listings)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, fields: ListingFields) -> RepositoryResult<Listing> {
        let mut listings = self.listings.write().await;
        let listing = Listing::new(next_id(&listings), fields, Utc::now());

        debug!("Created listing {} in memory", listing.id);
        listings.push(listing.clone());
        Ok(listing)
    }

    async fn update(&self, id: i64, fields: ListingFields) -> RepositoryResult<Listing> {
        let mut listings = self.listings.write().await;
        let listing = listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        listing.fields = fields;
        Ok(listing.clone())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut listings = self.listings.write().await;
        let before = listings.len();
        listings.retain(|l| l.id != id);
        Ok(listings.len() != before)
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
