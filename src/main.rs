//! Demo of the detail-page flow against the in-memory backend.
//!
//! Walks the two scenarios the page must handle:
//! 1. A known item loads, a review is submitted, and the refetched item
//!    shows the new review and re-derived aggregates.
//! 2. An unknown item fails to load and the page schedules a redirect to
//!    the site root.

use std::sync::Arc;
use std::time::Duration;

use catalog_detail::clients::{InMemoryCatalog, Navigator};
use catalog_detail::controller::{PageConfig, PageController};
use catalog_detail::lifecycle::setup_tracing;
use catalog_detail::model::{CatalogItem, ItemId};
use tracing::info;

/// Demo navigation sink: a real frontend would drive its router here.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to(&self, path: &str) {
        info!(path, "Navigation requested");
    }
}

#[tokio::main]
async fn main() {
    setup_tracing();

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

    let catalog = Arc::new(backend);
    let navigator = Arc::new(LoggingNavigator);
    let mut page = PageController::new(
        catalog.clone(),
        catalog.clone(),
        navigator,
        true,
        PageConfig::default(),
    );

    // Scenario 1: load, review, observe the refreshed aggregates.
    page.show(ItemId::from("p1")).await;
    let item = page.item().expect("p1 should load");
    info!(name = %item.name, stock = item.stock, in_stock = item.in_stock(), "Item loaded");

    page.set_rating(4);
    page.set_title("Good");
    page.set_comment("Nice");
    if let Err(e) = page.submit_review().await {
        info!(error = %e, "Submission rejected");
    }

    let item = page.item().expect("p1 should have been refetched");
    info!(
        review_count = item.review_count,
        average_rating = item.average_rating,
        "Item refreshed after review"
    );

    // Scenario 2: unknown item, delayed redirect to the root.
    page.show(ItemId::from("p404")).await;
    info!(error = ?page.load_error(), "Load failed; waiting for redirect");
    tokio::time::sleep(Duration::from_secs(4)).await;

    info!("Demo finished");
}
