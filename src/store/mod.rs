//! # Page Stores
//!
//! The two pieces of remote-facing state the controller owns:
//!
//! - **[`ResourceStore`]**: the catalog item and its [`LoadStatus`](crate::status::LoadStatus)
//! - **[`MutationStore`]**: the review submission and its [`SubmissionStatus`](crate::status::SubmissionStatus)
//!
//! ## Ownership
//!
//! Each store belongs to exactly one page-controller instance; there is no
//! cross-page sharing and no interior locking. The stores never perform I/O
//! themselves. The controller drives the collaborator call and feeds the
//! outcome back in, so every transition is synchronous and testable in
//! isolation.

pub mod mutation;
pub mod resource;

pub use mutation::MutationStore;
pub use resource::{FetchTicket, ResourceStore};
