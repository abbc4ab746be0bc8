use crate::error::RepositoryResult;
use crate::models::{Listing, ListingFields};
use async_trait::async_trait;

/// CRUD access to property listings.
///
/// `list` returns listings newest first; callers such as the site search
/// use that order as-is.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Listing>>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Listing>>;

    async fn create(&self, fields: ListingFields) -> RepositoryResult<Listing>;

    /// Replace the editable fields of listing `id`
    async fn update(&self, id: i64, fields: ListingFields) -> RepositoryResult<Listing>;

    /// Remove listing `id`; `false` when there was nothing to remove
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;

    /// Get the name of the backing store
    fn source_name(&self) -> &'static str;
}
