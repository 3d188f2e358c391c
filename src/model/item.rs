use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for catalog items.
///
/// Wraps the opaque key the routing layer hands us (e.g. `"p1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single customer review, as returned by the backend.
///
/// Reviews are created only through [`ReviewDraft`] submission; this crate
/// never edits or deletes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    /// Star rating, always in 1..=5 once persisted.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    /// The item this review belongs to.
    pub item: ItemId,
}

/// The catalog item shown on the detail page.
///
/// Replaced wholesale on every successful fetch (no partial merge).
/// `average_rating` and `review_count` are owned by the backend; we only
/// ever observe them, never recompute them from `reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub description: String,
    /// Units in stock. `u32` keeps the non-negative invariant structural.
    pub stock: u32,
    pub average_rating: f32,
    pub review_count: u32,
    pub reviews: Vec<Review>,
}

impl CatalogItem {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// DTO for submitting a new review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub item: ItemId,
}
