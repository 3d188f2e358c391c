//! # In-Memory Catalog Backend
//!
//! A [`CatalogApi`] + [`ReviewApi`] implementation backed by a `HashMap`,
//! used by the demo binary and the integration tests. It owns the derived
//! aggregates: a successful submission appends the review and recomputes
//! `average_rating` and `review_count`, so a refetch observes the update.
//! That is exactly the contract the page controller relies on.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::clients::api::{CatalogApi, ReviewApi};
use crate::error::{FetchError, SubmitError};
use crate::model::{CatalogItem, ItemId, Review, ReviewDraft};

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<ItemId, CatalogItem>,
    next_review_id: u32,
}

/// Shared in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item.
    pub fn insert(&self, item: CatalogItem) {
        let mut inner = self.inner.lock().unwrap();
        inner.items.insert(item.id.clone(), item);
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn fetch_item(&self, id: &ItemId) -> Result<CatalogItem, FetchError> {
        let inner = self.inner.lock().unwrap();
        debug!(%id, "fetch_item");
        inner
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.clone()))
    }
}

#[async_trait]
impl ReviewApi for InMemoryCatalog {
    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, SubmitError> {
        if !(1..=5).contains(&draft.rating) {
            return Err(SubmitError::Validation(format!(
                "rating {} is outside 1..=5",
                draft.rating
            )));
        }

        let mut inner = self.inner.lock().unwrap();
        inner.next_review_id += 1;
        let review = Review {
            id: format!("review_{}", inner.next_review_id),
            rating: draft.rating,
            title: draft.title.clone(),
            comment: draft.comment.clone(),
            item: draft.item.clone(),
        };

        let item = inner
            .items
            .get_mut(&draft.item)
            .ok_or_else(|| SubmitError::Validation(format!("unknown item {}", draft.item)))?;

        item.reviews.push(review.clone());
        // Aggregates are owned here, never recomputed by the page.
        item.review_count = item.reviews.len() as u32;
        item.average_rating =
            item.reviews.iter().map(|r| f32::from(r.rating)).sum::<f32>() / item.reviews.len() as f32;

        info!(item = %draft.item, review_id = %review.id, "Review stored");
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CatalogItem {
        CatalogItem {
            id: ItemId::from("p1"),
            name: "Widget".to_string(),
            brand: "Acme".to_string(),
            image: "widget.png".to_string(),
            description: "A widget".to_string(),
            stock: 5,
            average_rating: 0.0,
            review_count: 0,
            reviews: vec![],
        }
    }

    #[tokio::test]
    async fn fetch_unknown_item_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.fetch_item(&ItemId::from("p404")).await.unwrap_err();
        assert_eq!(err, FetchError::NotFound(ItemId::from("p404")));
    }

    #[tokio::test]
    async fn submit_appends_review_and_rederives_aggregates() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(widget());

        let draft = ReviewDraft {
            rating: 4,
            title: "Good".to_string(),
            comment: "Nice".to_string(),
            item: ItemId::from("p1"),
        };
        let review = catalog.submit_review(&draft).await.unwrap();
        assert_eq!(review.rating, 4);

        let item = catalog.fetch_item(&ItemId::from("p1")).await.unwrap();
        assert_eq!(item.review_count, 1);
        assert_eq!(item.average_rating, 4.0);
        assert_eq!(item.reviews.len(), 1);
    }

    #[tokio::test]
    async fn submit_rejects_out_of_range_rating() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(widget());

        let draft = ReviewDraft {
            rating: 9,
            title: String::new(),
            comment: String::new(),
            item: ItemId::from("p1"),
        };
        assert!(matches!(
            catalog.submit_review(&draft).await,
            Err(SubmitError::Validation(_))
        ));
    }
}
