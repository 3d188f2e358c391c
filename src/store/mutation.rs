//! # Mutation Store
//!
//! Holds the state of the review-submission operation. [`MutationStore::start`]
//! validates the draft and moves to `Submitting`; [`MutationStore::complete`]
//! records the terminal outcome; [`MutationStore::reset`] marks that outcome
//! as consumed.
//!
//! The reset contract is the central correctness hazard of the page: the
//! controller must call `reset` exactly once after observing `Succeeded` or
//! `Failed`, else it would re-fire the same reaction (refetch / form clear)
//! on every subsequent evaluation pass.

use tracing::{debug, warn};

use crate::error::{ReviewError, SubmitError};
use crate::model::{ItemId, Review, ReviewDraft};
use crate::status::SubmissionStatus;

/// Store for the in-flight review submission.
#[derive(Debug, Default)]
pub struct MutationStore {
    status: SubmissionStatus,
}

impl MutationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and transitions to `Submitting`.
    ///
    /// Rejects drafts whose rating is outside 1..=5 or that target a
    /// different item than the one currently shown. No transition happens
    /// on rejection.
    pub fn start(&mut self, draft: &ReviewDraft, current: &ItemId) -> Result<(), ReviewError> {
        if !(1..=5).contains(&draft.rating) {
            warn!(rating = draft.rating, "Rejecting review draft");
            return Err(ReviewError::RatingOutOfRange(draft.rating));
        }
        if &draft.item != current {
            warn!(expected = %current, got = %draft.item, "Rejecting review draft");
            return Err(ReviewError::WrongItem {
                expected: current.clone(),
                got: draft.item.clone(),
            });
        }
        debug!(item = %draft.item, rating = draft.rating, "Submission started");
        self.status = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Records the terminal outcome of the submission.
    pub fn complete(&mut self, result: Result<Review, SubmitError>) {
        match result {
            Ok(review) => {
                debug!(review_id = %review.id, item = %review.item, "Submission succeeded");
                self.status = SubmissionStatus::Succeeded(review);
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.status = SubmissionStatus::Failed(e.to_string());
            }
        }
    }

    /// Returns to `Idle`, marking the terminal state as consumed.
    pub fn reset(&mut self) {
        self.status = SubmissionStatus::Idle;
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Takes a terminal state out of the store, leaving it `Idle`.
    ///
    /// Combines observe-and-reset so a terminal state cannot be consumed
    /// twice by accident.
    pub fn take_outcome(&mut self) -> Option<SubmissionStatus> {
        if self.status.is_terminal() {
            Some(std::mem::replace(&mut self.status, SubmissionStatus::Idle))
        } else {
            None
        }
    }
}
