//! # Tagged Status Types
//!
//! The two state machines the page is built on: [`LoadStatus`] for the
//! resource fetch and [`SubmissionStatus`] for the review write.
//!
//! Exactly one state holds at a time. `Loaded`/`Error` and
//! `Succeeded`/`Failed` are **terminal**: they do not change again until a
//! new operation is explicitly started. The controller consumes a terminal
//! state exactly once by resetting the owning store back to `Idle`. If it
//! forgot to, the same reaction would re-fire on every subsequent
//! evaluation pass.

use crate::model::Review;

/// Load state of the remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Error(_))
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// State of the review-submission operation.
///
/// A submission record is created fresh per submit call and discarded
/// (reset to `Idle`) once its outcome has been consumed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded(Review),
    Failed(String),
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}
