//! # Collaborator Interfaces
//!
//! The page core does not own transport, persistence, or routing. This
//! module defines the contracts it consumes instead:
//!
//! - **[`CatalogApi`]**: fetch a catalog item by identifier
//! - **[`ReviewApi`]**: submit a review against an item
//! - **[`Navigator`]**: request a navigation, fire-and-forget
//!
//! Implementations are injected into the controller at construction time,
//! making ownership and testability explicit. [`memory`] provides an
//! in-memory backend for the demo and integration tests; [`mock`] provides
//! expectation-driven mocks for unit-testing the orchestration logic.

pub mod api;
pub mod memory;
pub mod mock;

pub use api::{CatalogApi, Navigator, ReviewApi};
pub use memory::InMemoryCatalog;
