//! # Mock Collaborators
//!
//! Expectation-driven stand-ins for [`CatalogApi`], [`ReviewApi`], and
//! [`Navigator`], for unit-testing the orchestration logic without a
//! backend.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_detail::clients::mock::MockCatalog;
//! use catalog_detail::clients::CatalogApi;
//! use catalog_detail::error::FetchError;
//! use catalog_detail::model::ItemId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = MockCatalog::new();
//!     catalog
//!         .expect_fetch("p404")
//!         .return_err(FetchError::NotFound(ItemId::from("p404")));
//!
//!     let result = catalog.fetch_item(&ItemId::from("p404")).await;
//!     assert!(result.is_err());
//!     catalog.verify();
//! }
//! ```
//!
//! Expectations are consumed in FIFO order. A call with no matching
//! expectation, or with a different identifier than expected, panics:
//! these types are meant for tests, where a mismatch should fail loudly.
//! Every call is also recorded, so tests can assert exactly-once properties
//! (e.g. "one fetch per mount, no duplicates").

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::api::{CatalogApi, Navigator, ReviewApi};
use crate::error::{FetchError, SubmitError};
use crate::model::{CatalogItem, ItemId, Review, ReviewDraft};

// =============================================================================
// CATALOG MOCK
// =============================================================================

/// Mock read side with a FIFO expectation queue and call recording.
#[derive(Debug, Default)]
pub struct MockCatalog {
    expectations: Mutex<VecDeque<(ItemId, Result<CatalogItem, FetchError>)>>,
    calls: Mutex<Vec<ItemId>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next `fetch_item` call to target `id`.
    pub fn expect_fetch(&self, id: impl Into<ItemId>) -> FetchExpectation<'_> {
        FetchExpectation {
            id: id.into(),
            queue: &self.expectations,
        }
    }

    /// All identifiers fetched so far, in call order.
    pub fn calls(&self) -> Vec<ItemId> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of fetches issued for `id`.
    pub fn fetch_count(&self, id: &ItemId) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == id).count()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("MockCatalog: {remaining} fetch expectation(s) never consumed");
        }
    }
}

/// Builder for a single `fetch_item` expectation.
pub struct FetchExpectation<'a> {
    id: ItemId,
    queue: &'a Mutex<VecDeque<(ItemId, Result<CatalogItem, FetchError>)>>,
}

impl FetchExpectation<'_> {
    pub fn return_ok(self, item: CatalogItem) {
        self.queue.lock().unwrap().push_back((self.id, Ok(item)));
    }

    pub fn return_err(self, error: FetchError) {
        self.queue.lock().unwrap().push_back((self.id, Err(error)));
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn fetch_item(&self, id: &ItemId) -> Result<CatalogItem, FetchError> {
        self.calls.lock().unwrap().push(id.clone());
        let (expected, response) = self
            .expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockCatalog: unexpected fetch_item({id})"));
        assert_eq!(&expected, id, "MockCatalog: fetch_item identifier mismatch");
        response
    }
}

// =============================================================================
// REVIEW MOCK
// =============================================================================

/// Mock write side with a FIFO expectation queue and call recording.
#[derive(Debug, Default)]
pub struct MockReviews {
    expectations: Mutex<VecDeque<Result<Review, SubmitError>>>,
    calls: Mutex<Vec<ReviewDraft>>,
}

impl MockReviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next `submit_review` call.
    pub fn expect_submit(&self) -> SubmitExpectation<'_> {
        SubmitExpectation {
            queue: &self.expectations,
        }
    }

    /// All drafts submitted so far, in call order.
    pub fn calls(&self) -> Vec<ReviewDraft> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submit_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("MockReviews: {remaining} submit expectation(s) never consumed");
        }
    }
}

/// Builder for a single `submit_review` expectation.
pub struct SubmitExpectation<'a> {
    queue: &'a Mutex<VecDeque<Result<Review, SubmitError>>>,
}

impl SubmitExpectation<'_> {
    pub fn return_ok(self, review: Review) {
        self.queue.lock().unwrap().push_back(Ok(review));
    }

    pub fn return_err(self, error: SubmitError) {
        self.queue.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl ReviewApi for MockReviews {
    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, SubmitError> {
        self.calls.lock().unwrap().push(draft.clone());
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockReviews: unexpected submit_review for {}", draft.item))
    }
}

// =============================================================================
// NAVIGATION RECORDER
// =============================================================================

/// Records every requested navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths requested so far, in call order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
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
    async fn expectations_are_consumed_in_order() {
        let catalog = MockCatalog::new();
        catalog.expect_fetch("p1").return_ok(widget());
        catalog
            .expect_fetch("p1")
            .return_err(FetchError::Transport("down".to_string()));

        assert!(catalog.fetch_item(&ItemId::from("p1")).await.is_ok());
        assert!(catalog.fetch_item(&ItemId::from("p1")).await.is_err());
        assert_eq!(catalog.fetch_count(&ItemId::from("p1")), 2);
        catalog.verify();
    }

    #[test]
    #[should_panic(expected = "never consumed")]
    fn verify_flags_unmet_expectations() {
        let catalog = MockCatalog::new();
        catalog.expect_fetch("p1").return_ok(widget());
        catalog.verify();
    }

    #[test]
    fn navigator_records_paths() {
        let nav = RecordingNavigator::new();
        nav.navigate_to("/");
        nav.navigate_to("/login");
        assert_eq!(nav.paths(), vec!["/".to_string(), "/login".to_string()]);
    }
}
