//! # Store Interfaces
//!
//! The storage seam this engine consumes. Implementations live with the
//! persistence collaborator (a database layer, the in-memory reference
//! stores in `memory`, a test double); the engine never retries or
//! interprets their failures beyond mapping a missing event onto the
//! lifecycle error vocabulary.
//!
//! Implementations must serialize conflicting writes to the same record
//! (last-write-wins or better). The engine guarantees in return that a
//! status change and its history record arrive together, through
//! [`EventStore::commit_transition`], so no implementation can observe a
//! half-applied transition.

use std::sync::Arc;

use thiserror::Error;

use gala_core::{EventId, SeriesId, Timestamp};
use gala_state::{Event, Series, StateTransition};

// ─── Errors ──────────────────────────────────────────────────────────

/// Failure inside a storage collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A conflicting write was rejected by the store's serialization.
    #[error("conflicting write: {0}")]
    Conflict(String),

    /// Backend failure (connection, timeout, corruption).
    #[error("storage backend error: {0}")]
    Backend(String),
}

// ─── Event Store ─────────────────────────────────────────────────────

/// CRUD seam over events.
pub trait EventStore: Send + Sync {
    /// Fetch an event snapshot.
    fn get(&self, id: EventId) -> Result<Event, StoreError>;

    /// Persist a transitioned event snapshot together with its
    /// [`StateTransition`] record, in one transactional boundary.
    /// Returns the stored snapshot.
    fn commit_transition(
        &self,
        event: &Event,
        record: &StateTransition,
    ) -> Result<Event, StoreError>;

    /// Widen (or otherwise adjust) an event's window. `None` leaves a
    /// bound unchanged. Returns the stored snapshot.
    fn update_window(
        &self,
        id: EventId,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Event, StoreError>;

    /// Events eligible for the auto-transition sweep: auto-transition
    /// enabled and currently `published`, `pre_event`, or `live`.
    fn list_auto_transition_candidates(&self) -> Result<Vec<Event>, StoreError>;

    /// The append-only transition history of an event, oldest first.
    fn transitions(&self, id: EventId) -> Result<Vec<StateTransition>, StoreError>;
}

// ─── Series Store ────────────────────────────────────────────────────

/// CRUD seam over series.
pub trait SeriesStore: Send + Sync {
    /// Fetch a series snapshot.
    fn get(&self, id: SeriesId) -> Result<Series, StoreError>;

    /// All series under `main_event_id`, optionally excluding one (the
    /// series being edited).
    fn list_siblings(
        &self,
        main_event_id: EventId,
        exclude: Option<SeriesId>,
    ) -> Result<Vec<Series>, StoreError>;

    /// Persist a new series. Returns the stored snapshot.
    fn create(&self, series: Series) -> Result<Series, StoreError>;

    /// Replace an existing series snapshot. Returns the stored snapshot.
    fn update(&self, series: Series) -> Result<Series, StoreError>;
}

// ─── Blanket impls ───────────────────────────────────────────────────

impl<T: EventStore + ?Sized> EventStore for Arc<T> {
    fn get(&self, id: EventId) -> Result<Event, StoreError> {
        (**self).get(id)
    }

    fn commit_transition(
        &self,
        event: &Event,
        record: &StateTransition,
    ) -> Result<Event, StoreError> {
        (**self).commit_transition(event, record)
    }

    fn update_window(
        &self,
        id: EventId,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Event, StoreError> {
        (**self).update_window(id, start, end)
    }

    fn list_auto_transition_candidates(&self) -> Result<Vec<Event>, StoreError> {
        (**self).list_auto_transition_candidates()
    }

    fn transitions(&self, id: EventId) -> Result<Vec<StateTransition>, StoreError> {
        (**self).transitions(id)
    }
}

impl<T: SeriesStore + ?Sized> SeriesStore for Arc<T> {
    fn get(&self, id: SeriesId) -> Result<Series, StoreError> {
        (**self).get(id)
    }

    fn list_siblings(
        &self,
        main_event_id: EventId,
        exclude: Option<SeriesId>,
    ) -> Result<Vec<Series>, StoreError> {
        (**self).list_siblings(main_event_id, exclude)
    }

    fn create(&self, series: Series) -> Result<Series, StoreError> {
        (**self).create(series)
    }

    fn update(&self, series: Series) -> Result<Series, StoreError> {
        (**self).update(series)
    }
}
