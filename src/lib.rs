//! # Catalog Detail Page Core
//!
//! > **The orchestration contract of a single catalog-item detail view.**
//!
//! This crate owns the lifecycle of one remotely fetched catalog item and
//! the review-submission write path against it. Three asynchronous
//! triggers have to be reconciled without races or duplicate work:
//!
//! - **Initial load**: the page is mounted, or switched to a new identifier.
//! - **Post-mutation refresh**: an accepted review invalidates the loaded
//!   item snapshot.
//! - **Error navigation**: a failed load sends the user back to the root.
//!
//! ## Design Philosophy
//!
//! The reference behavior this models ("re-run an effect whenever any
//! watched value changes, including values the effect itself just reset")
//! is re-architected here as an **explicit state machine**:
//!
//! - **Exactly-once reactions**: terminal states (`Loaded`/`Error`,
//!   `Succeeded`/`Failed`) are consumed by resetting the owning store, so
//!   no reaction can re-fire on a later evaluation pass.
//! - **Stale-fetch guard**: every fetch carries a generation-stamped
//!   ticket, so a late response for a superseded identifier is discarded
//!   instead of overwriting the page with the wrong item.
//! - **Scoped timer**: the error-redirect timer is cancelled when the
//!   page is torn down.
//!
//! ## Module Tour
//!
//! - **[`model`]**: pure data. [`CatalogItem`](model::CatalogItem),
//!   [`Review`](model::Review), [`ReviewForm`](model::ReviewForm).
//! - **[`status`]**: the [`LoadStatus`](status::LoadStatus) and
//!   [`SubmissionStatus`](status::SubmissionStatus) tagged states.
//! - **[`store`]**: [`ResourceStore`](store::ResourceStore) and
//!   [`MutationStore`](store::MutationStore), the only owners of remote
//!   state.
//! - **[`clients`]**: the collaborator contracts
//!   ([`CatalogApi`](clients::CatalogApi), [`ReviewApi`](clients::ReviewApi),
//!   [`Navigator`](clients::Navigator)), an in-memory backend, and
//!   expectation-driven mocks.
//! - **[`controller`]**: [`PageController`](controller::PageController),
//!   the orchestration state machine.
//! - **[`lifecycle`]**: tracing setup and wiring notes.
//! - **[`error`]**: the error taxonomy.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use catalog_detail::clients::mock::{MockCatalog, MockReviews, RecordingNavigator};
//! use catalog_detail::controller::{PageConfig, PageController};
//! use catalog_detail::error::FetchError;
//! use catalog_detail::model::ItemId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Arc::new(MockCatalog::new());
//!     let reviews = Arc::new(MockReviews::new());
//!     let navigator = Arc::new(RecordingNavigator::new());
//!
//!     catalog
//!         .expect_fetch("p404")
//!         .return_err(FetchError::NotFound(ItemId::from("p404")));
//!
//!     let mut page = PageController::new(
//!         catalog.clone(),
//!         reviews,
//!         navigator,
//!         true,
//!         PageConfig::default(),
//!     );
//!     page.show(ItemId::from("p404")).await;
//!
//!     assert_eq!(page.load_error(), Some("Item not found: p404"));
//!     assert!(page.redirect_pending());
//! }
//! ```
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod status;
pub mod store;

pub use controller::{PageConfig, PageController, ROOT_PATH};
pub use model::{CatalogItem, ItemId, Review, ReviewDraft, ReviewForm};
pub use status::{LoadStatus, SubmissionStatus};
pub use store::{MutationStore, ResourceStore};
