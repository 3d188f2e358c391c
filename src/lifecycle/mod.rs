//! # Page Lifecycle
//!
//! Wiring and observability for a detail-page instance.
//!
//! A page is constructed explicitly: collaborators in, controller out. The
//! controller's redirect timer is scoped to the controller itself, so
//! dropping the page cancels any navigation still pending and teardown
//! needs no extra choreography.
//!
//! [`setup_tracing`] initializes structured logging for binaries and should
//! be called once at startup.

pub mod tracing;

pub use self::tracing::setup_tracing;
