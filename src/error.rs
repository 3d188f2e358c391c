//! # Error Types
//!
//! This module defines the error taxonomy for the detail page. By
//! centralizing error definitions, every collaborator and store agrees on
//! what can fail and how it is surfaced.
//!
//! Two kinds cross the network boundary ([`FetchError`], [`SubmitError`])
//! and are collapsed into user-facing message strings inside the stores'
//! terminal states; neither is propagated further up. [`ReviewError`]
//! covers local rejections that never reach the network.

use crate::model::ItemId;

/// Why a catalog-item fetch failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Why a review submission failed on the backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid review: {0}")]
    Validation(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Local rejections of a review submission, raised before any network call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewError {
    #[error("A rating must be chosen before submitting")]
    RatingRequired,
    #[error("Rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
    #[error("Sign in to write a review")]
    NotSignedIn,
    #[error("Review targets {got}, but the page is showing {expected}")]
    WrongItem { expected: ItemId, got: ItemId },
    #[error("No item is being shown")]
    NoItemShown,
}
