use crate::error::{RepositoryError, RepositoryResult, StorageError};
use crate::models::{Listing, ListingFields};
use crate::repository::traits::ListingRepository;
use crate::repository::{next_id, sort_newest_first};
use crate::storage::{KeyValueStore, LEGACY_PROPERTIES_KEY};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Listings kept as one JSON array in key-value storage.
///
/// This is the store the admin panel used before listings moved to the
/// remote database. Every change rewrites the whole array.
pub struct LocalListingStore {
    storage: Arc<dyn KeyValueStore>,
}

impl LocalListingStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    fn load(&self) -> RepositoryResult<Vec<Listing>> {
        match self.storage.get(LEGACY_PROPERTIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!("Stored property list is unreadable: {}", e);
                RepositoryError::Storage(StorageError::from(e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, listings: &[Listing]) -> RepositoryResult<()> {
        let json = serde_json::to_string(listings).map_err(StorageError::from)?;
        self.storage.set(LEGACY_PROPERTIES_KEY, &json)?;
        Ok(())
    }
}

#[async_trait]
impl ListingRepository for LocalListingStore {
    async fn list(&self) -> RepositoryResult<Vec<Listing>> {
        let mut listings = self.load()?;
        sort_newest_first(&mut listings);
        Ok(listings)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Listing>> {
        Ok(self.load()?.into_iter().find(|l| l.id == id))
    }

    async fn create(&self, fields: ListingFields) -> RepositoryResult<Listing> {
        let mut listings = self.load()?;
        let listing = Listing::new(next_id(&listings), fields, Utc::now());

        listings.push(listing.clone());
        self.store(&listings)?;

        info!("Saved listing {} locally", listing.id);
        Ok(listing)
    }

    async fn update(&self, id: i64, fields: ListingFields) -> RepositoryResult<Listing> {
        let mut listings = self.load()?;
        let listing = listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        listing.fields = fields;
        let updated = listing.clone();
        self.store(&listings)?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut listings = self.load()?;
        let before = listings.len();
        listings.retain(|l| l.id != id);

        if listings.len() == before {
            return Ok(false);
        }

        self.store(&listings)?;
        Ok(true)
    }

    fn source_name(&self) -> &'static str {
        "local"
    }
}
