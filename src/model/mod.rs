//! # Domain Models
//!
//! Pure data structures for the catalog detail page: the remote
//! [`CatalogItem`] with its [`Review`] list, the [`ReviewDraft`] submit DTO,
//! and the locally-owned [`ReviewForm`].
//!
//! The remote models are read-only from this crate's perspective: the item
//! is replaced wholesale on every successful fetch, and reviews are created
//! only via submission (never edited or deleted here). Aggregate fields
//! (`average_rating`, `review_count`) are derived by the backend and never
//! recomputed locally.

pub mod form;
pub mod item;

pub use form::ReviewForm;
pub use item::{CatalogItem, ItemId, Review, ReviewDraft};
