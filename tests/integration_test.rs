//! Full end-to-end flow against the in-memory backend: load, review,
//! refetch, and the not-found redirect, with the backend owning review ids
//! and aggregate derivation.

use std::sync::Arc;
use std::time::Duration;

use catalog_detail::clients::mock::RecordingNavigator;
use catalog_detail::clients::InMemoryCatalog;
use catalog_detail::controller::{PageConfig, PageController};
use catalog_detail::error::ReviewError;
use catalog_detail::model::{CatalogItem, ItemId};
use catalog_detail::status::LoadStatus;

fn seeded_backend() -> InMemoryCatalog {
    let backend = InMemoryCatalog::new();
    backend.insert(CatalogItem {
        id: ItemId::from("p1"),
        name: "Super Widget".to_string(),
        brand: "Acme".to_string(),
        image: "super-widget.png".to_string(),
        description: "The widget, but super.".to_string(),
        stock: 5,
        average_rating: 0.0,
        review_count: 0,
        reviews: vec![],
    });
    backend
}

fn page(backend: &InMemoryCatalog, navigator: Arc<RecordingNavigator>, signed_in: bool) -> PageController {
    let backend = Arc::new(backend.clone());
    PageController::new(
        backend.clone(),
        backend,
        navigator,
        signed_in,
        PageConfig::default(),
    )
}

#[tokio::test]
async fn review_flow_updates_the_backend_and_the_page() {
    let backend = seeded_backend();
    let navigator = Arc::new(RecordingNavigator::new());
    let mut page = page(&backend, navigator.clone(), true);

    page.show(ItemId::from("p1")).await;
    let item = page.item().expect("p1 should load");
    assert_eq!(item.stock, 5);
    assert_eq!(item.review_count, 0);

    // First review.
    page.set_rating(4);
    page.set_title("Good");
    page.set_comment("Nice");
    page.submit_review().await.unwrap();

    assert!(page.form().is_clear());
    assert!(page.submission_status().is_idle());
    let item = page.item().expect("p1 should have been refetched");
    assert_eq!(item.review_count, 1);
    assert_eq!(item.average_rating, 4.0);
    assert_eq!(item.reviews[0].title, "Good");

    // Second review moves the backend-derived average.
    page.set_rating(2);
    page.submit_review().await.unwrap();

    let item = page.item().expect("p1 should have been refetched again");
    assert_eq!(item.review_count, 2);
    assert_eq!(item.average_rating, 3.0);

    // No navigation was ever requested on the happy path.
    assert!(navigator.paths().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unknown_item_redirects_home() {
    let backend = seeded_backend();
    let navigator = Arc::new(RecordingNavigator::new());
    let mut page = page(&backend, navigator.clone(), true);

    page.show(ItemId::from("p404")).await;

    assert_eq!(page.load_status(), &LoadStatus::Idle);
    assert_eq!(page.load_error(), Some("Item not found: p404"));

    tokio::time::sleep(Duration::from_secs(4)).await;
    tokio::task::yield_now().await;
    assert_eq!(navigator.paths(), vec!["/".to_string()]);
}

#[tokio::test]
async fn signed_out_visitor_cannot_write_reviews() {
    let backend = seeded_backend();
    let navigator = Arc::new(RecordingNavigator::new());
    let mut page = page(&backend, navigator, false);

    page.show(ItemId::from("p1")).await;
    page.set_rating(5);

    let err = page.submit_review().await.unwrap_err();
    assert_eq!(err, ReviewError::NotSignedIn);

    // The backend never saw a review.
    page.show(ItemId::from("p1")).await;
    assert_eq!(page.item().map(|i| i.review_count), Some(0));
}
