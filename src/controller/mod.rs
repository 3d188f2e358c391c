//! # Page Controller
//!
//! The orchestration layer for the catalog detail page. It owns the
//! [`ResourceStore`], the [`MutationStore`], and the [`ReviewForm`], and
//! turns the page's asynchronous triggers (identifier change, submission
//! completion, load failure) into an explicit state machine with named
//! reaction rules instead of an unconditional "run on every change"
//! block.
//!
//! ## Reaction rules
//!
//! Evaluated in this fixed order after every state-change notification:
//!
//! 1. **Identifier change / mount** ([`PageController::show`]): clear the
//!    form, reset any stale submission record, issue exactly one fetch.
//! 2. **Submission succeeded**: clear the form, refetch the current item so
//!    the new review and updated aggregates are observed, consume the
//!    submission state.
//! 3. **Submission failed**: record the message, clear the form (the user
//!    re-enters the review), consume the submission state.
//! 4. **Load failed**: record the message, schedule a one-shot navigation
//!    to the site root after [`PageConfig::redirect_delay`], and reset the
//!    resource store immediately (not after the delay).
//!
//! Rules 2 and 3 are mutually exclusive by tag. Rule 4 fires on the current
//! error state regardless of which rule triggered the fetch, so a mount
//! that fails immediately still schedules the redirect.
//!
//! ## Dependencies
//!
//! Collaborators are injected at construction time rather than reached
//! through shared context, so a test can hand the controller mocks and
//! observe every outbound call.
//!
//! ## Concurrency
//!
//! Single-threaded cooperative: the only suspension points are the
//! collaborator awaits and the redirect timer. Reactions run synchronously
//! after each completion. The redirect timer is a scoped resource: it is
//! aborted when replaced or when the controller is dropped, so a torn-down
//! page never navigates.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::clients::{CatalogApi, Navigator, ReviewApi};
use crate::error::ReviewError;
use crate::model::{CatalogItem, ItemId, ReviewDraft, ReviewForm};
use crate::status::{LoadStatus, SubmissionStatus};
use crate::store::{MutationStore, ResourceStore};

/// Where a failed page navigates to.
pub const ROOT_PATH: &str = "/";

/// Tunable page behavior, injected at construction.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Delay before navigating away after a load failure.
    pub redirect_delay: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_secs(3),
        }
    }
}

/// Handle to the pending redirect task. Dropping it aborts the task, which
/// is what guarantees cancellation on every exit path.
#[derive(Debug)]
struct RedirectGuard {
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Detail-view controller for a single catalog item.
pub struct PageController {
    catalog: Arc<dyn CatalogApi>,
    reviews: Arc<dyn ReviewApi>,
    navigator: Arc<dyn Navigator>,
    signed_in: bool,
    config: PageConfig,
    resource: ResourceStore<CatalogItem>,
    mutation: MutationStore,
    form: ReviewForm,
    current: Option<ItemId>,
    load_error: Option<String>,
    submit_error: Option<String>,
    redirect: Option<RedirectGuard>,
}

impl PageController {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        reviews: Arc<dyn ReviewApi>,
        navigator: Arc<dyn Navigator>,
        signed_in: bool,
        config: PageConfig,
    ) -> Self {
        Self {
            catalog,
            reviews,
            navigator,
            signed_in,
            config,
            resource: ResourceStore::new(),
            mutation: MutationStore::new(),
            form: ReviewForm::default(),
            current: None,
            load_error: None,
            submit_error: None,
            redirect: None,
        }
    }

    /// Rule 1: mount, or switch to a different identifier.
    ///
    /// Clears the form, defensively resets any submission record left over
    /// from a previous item, and issues exactly one fetch for `id`.
    #[instrument(skip(self), fields(item = %id))]
    pub async fn show(&mut self, id: ItemId) {
        info!("Showing item");
        self.form.clear();
        self.mutation.reset();
        self.load_error = None;
        self.submit_error = None;
        self.current = Some(id.clone());
        self.fetch(id).await;
        self.react().await;
    }

    /// Submission entry point.
    ///
    /// Rejects locally, with no network call, when the user is not
    /// signed in, when no rating has been chosen, or when no item is
    /// being shown.
    /// Otherwise builds a [`ReviewDraft`] from the form and the current
    /// identifier and drives the submission to its terminal state.
    #[instrument(skip(self))]
    pub async fn submit_review(&mut self) -> Result<(), ReviewError> {
        if !self.signed_in {
            return Err(ReviewError::NotSignedIn);
        }
        let rating = self.form.rating.ok_or(ReviewError::RatingRequired)?;
        let item = self.current.clone().ok_or(ReviewError::NoItemShown)?;

        let draft = ReviewDraft {
            rating,
            title: self.form.title.clone(),
            comment: self.form.comment.clone(),
            item: item.clone(),
        };
        self.submit_error = None;
        self.mutation.start(&draft, &item)?;

        let result = self.reviews.submit_review(&draft).await;
        self.mutation.complete(result);
        self.react().await;
        Ok(())
    }

    /// Evaluates rules 2–4 against the current store states.
    ///
    /// `take_outcome` consumes the submission's terminal state, so each
    /// occurrence triggers its reaction exactly once; likewise the resource
    /// error is reset in the same pass that observes it.
    async fn react(&mut self) {
        match self.mutation.take_outcome() {
            Some(SubmissionStatus::Succeeded(review)) => {
                info!(review_id = %review.id, item = %review.item, "Review accepted; refreshing item");
                self.form.clear();
                if let Some(id) = self.current.clone() {
                    self.fetch(id).await;
                }
            }
            Some(SubmissionStatus::Failed(message)) => {
                warn!(error = %message, "Review rejected; clearing form");
                self.submit_error = Some(message);
                self.form.clear();
            }
            _ => {}
        }

        if let Some(message) = self.resource.status().error_message().map(str::to_string) {
            self.load_error = Some(message);
            self.schedule_redirect();
            self.resource.reset();
        }
    }

    async fn fetch(&mut self, id: ItemId) {
        let ticket = self.resource.begin(id.clone());
        let result = self.catalog.fetch_item(&id).await;
        self.resource.complete(ticket, result);
    }

    /// Rule 4's side effect: one-shot navigation to the root after the
    /// configured delay. Replacing the guard aborts a redirect that is
    /// still pending, so at most one timer exists at a time.
    fn schedule_redirect(&mut self) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.config.redirect_delay;
        warn!(delay_ms = delay.as_millis() as u64, "Load failed; scheduling redirect to root");
        self.redirect = Some(RedirectGuard {
            handle: tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                navigator.navigate_to(ROOT_PATH);
            }),
        });
    }

    // --- Presentation accessors ---

    /// The loaded item, if the last fetch succeeded.
    pub fn item(&self) -> Option<&CatalogItem> {
        self.resource.item()
    }

    pub fn load_status(&self) -> &LoadStatus<CatalogItem> {
        self.resource.status()
    }

    pub fn submission_status(&self) -> &SubmissionStatus {
        self.mutation.status()
    }

    /// User-facing message for the most recent load failure.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// User-facing message for the most recent submission failure.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn current_item_id(&self) -> Option<&ItemId> {
        self.current.as_ref()
    }

    /// Whether the review form should be offered at all.
    pub fn can_review(&self) -> bool {
        self.signed_in
    }

    /// Whether a scheduled redirect is still pending.
    ///
    /// Returns `false` once the timer has fired (or was never scheduled),
    /// so the presentation layer can distinguish "about to navigate" from
    /// "already navigated".
    pub fn redirect_pending(&self) -> bool {
        self.redirect
            .as_ref()
            .is_some_and(|guard| !guard.handle.is_finished())
    }

    // --- Form edits ---

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.form.rating = Some(rating);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.form.comment = comment.into();
    }
}
