//! # Observability & Tracing
//!
//! Structured logging for the page core, built on the `tracing` crate.
//!
//! ## What gets traced
//!
//! - **Store transitions** (`debug`/`warn`): fetch started, loaded, and
//!   failed, stale-result discards, submission lifecycle.
//! - **Controller reactions** (`info`/`warn`): mounts, accepted and
//!   rejected reviews, scheduled redirects, inside `#[instrument]` spans
//!   carrying the item identifier.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full store transitions
//! RUST_LOG=debug cargo run
//! ```

/// Initializes the tracing subscriber with environment-based filtering.
///
/// Call once at startup; log levels are controlled via the `RUST_LOG`
/// environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
