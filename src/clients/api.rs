use async_trait::async_trait;

use crate::error::{FetchError, SubmitError};
use crate::model::{CatalogItem, ItemId, Review, ReviewDraft};

/// Read side of the catalog backend.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Retrieves the item identified by `id`.
    async fn fetch_item(&self, id: &ItemId) -> Result<CatalogItem, FetchError>;
}

/// Write side of the review backend.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Persists a new review and returns it as stored.
    ///
    /// On success the previously loaded item snapshot is stale: the
    /// backend has appended the review and re-derived the aggregate
    /// rating, so callers refetch to observe it.
    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, SubmitError>;
}

/// Navigation sink. Fire-and-forget: the page requests a path and moves on.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}
