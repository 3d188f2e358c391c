//! # Resource Store
//!
//! Holds the remote entity and its load status. Mutated only by fetch
//! lifecycle calls: [`ResourceStore::begin`] when a fetch is issued and
//! [`ResourceStore::complete`] when it resolves.
//!
//! ## Stale-response guard
//!
//! Identifier changes can arrive while a prior fetch for a different
//! identifier is still in flight. A late response for a superseded
//! identifier must not overwrite the store with data for the wrong item, so
//! `begin` hands out a [`FetchTicket`] stamped with a generation counter and
//! `complete` discards any result whose ticket is no longer current.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::model::ItemId;
use crate::status::LoadStatus;

/// Proof that a fetch was issued, carrying the identifier it was issued for.
///
/// Deliberately not `Clone`: one ticket, one completion.
#[derive(Debug)]
pub struct FetchTicket {
    id: ItemId,
    generation: u64,
}

/// Store for the remotely fetched entity.
#[derive(Debug)]
pub struct ResourceStore<T> {
    status: LoadStatus<T>,
    requested: Option<ItemId>,
    generation: u64,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Idle,
            requested: None,
            generation: 0,
        }
    }

    /// Begins a fetch for `id`: transitions to `Loading` synchronously,
    /// before the asynchronous operation resolves, and supersedes any fetch
    /// still in flight.
    pub fn begin(&mut self, id: ItemId) -> FetchTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.requested = Some(id.clone());
        debug!(%id, generation = self.generation, "Fetch started");
        FetchTicket {
            id,
            generation: self.generation,
        }
    }

    /// Applies a fetch outcome, unless the ticket has been superseded by a
    /// newer `begin`. Returns whether the outcome was applied.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> bool {
        if ticket.generation != self.generation {
            debug!(id = %ticket.id, generation = ticket.generation, "Discarding stale fetch result");
            return false;
        }
        match result {
            Ok(item) => {
                debug!(id = %ticket.id, "Fetch loaded");
                self.status = LoadStatus::Loaded(item);
            }
            Err(e) => {
                warn!(id = %ticket.id, error = %e, "Fetch failed");
                self.status = LoadStatus::Error(e.to_string());
            }
        }
        true
    }

    /// Returns the status to `Idle` without touching the requested
    /// identifier. Used to consume a terminal state exactly once after the
    /// controller has reacted to it.
    pub fn reset(&mut self) {
        self.status = LoadStatus::Idle;
    }

    pub fn status(&self) -> &LoadStatus<T> {
        &self.status
    }

    /// The loaded entity, if the last fetch succeeded.
    pub fn item(&self) -> Option<&T> {
        self.status.value()
    }

    /// The identifier of the most recently requested fetch.
    pub fn requested(&self) -> Option<&ItemId> {
        self.requested.as_ref()
    }
}
