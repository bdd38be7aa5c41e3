//! # In-Memory Reference Stores
//!
//! Mutex-guarded map implementations of the store seam. These are the
//! reference semantics for any real backend — per-record last-write-wins,
//! transition commits atomic under the store lock — and the fixture for
//! every test in the workspace.

use std::collections::HashMap;

use parking_lot::Mutex;

use gala_core::{EventId, SeriesId, Timestamp};
use gala_state::{Event, EventStatus, Series, StateTransition};

use crate::store::{EventStore, SeriesStore, StoreError};

// ─── Events ──────────────────────────────────────────────────────────

/// In-memory [`EventStore`].
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    inner: Mutex<EventRows>,
}

#[derive(Debug, Default)]
struct EventRows {
    events: HashMap<EventId, Event>,
    transitions: Vec<StateTransition>,
}

impl MemoryEventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an event, returning its id.
    pub fn insert(&self, event: Event) -> EventId {
        let id = event.id;
        self.inner.lock().events.insert(id, event);
        id
    }

    /// Number of events currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().events.is_empty()
    }
}

impl EventStore for MemoryEventStore {
    fn get(&self, id: EventId) -> Result<Event, StoreError> {
        self.inner
            .lock()
            .events
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn commit_transition(
        &self,
        event: &Event,
        record: &StateTransition,
    ) -> Result<Event, StoreError> {
        let mut rows = self.inner.lock();
        if !rows.events.contains_key(&event.id) {
            return Err(StoreError::NotFound(event.id.to_string()));
        }
        // One lock hold: snapshot and history land together or not at all.
        rows.events.insert(event.id, event.clone());
        rows.transitions.push(record.clone());
        Ok(event.clone())
    }

    fn update_window(
        &self,
        id: EventId,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Event, StoreError> {
        let mut rows = self.inner.lock();
        let event = rows
            .events
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(start) = start {
            event.start_date = start;
        }
        if let Some(end) = end {
            event.end_date = end;
        }
        Ok(event.clone())
    }

    fn list_auto_transition_candidates(&self) -> Result<Vec<Event>, StoreError> {
        let rows = self.inner.lock();
        let mut candidates: Vec<Event> = rows
            .events
            .values()
            .filter(|e| {
                e.auto_transition_enabled
                    && matches!(
                        e.status,
                        EventStatus::Published | EventStatus::PreEvent | EventStatus::Live
                    )
            })
            .cloned()
            .collect();
        // Deterministic order for tests and log output.
        candidates.sort_by_key(|e| (e.start_date, e.id.to_string()));
        Ok(candidates)
    }

    fn transitions(&self, id: EventId) -> Result<Vec<StateTransition>, StoreError> {
        let rows = self.inner.lock();
        Ok(rows
            .transitions
            .iter()
            .filter(|r| r.event_id == id)
            .cloned()
            .collect())
    }
}

// ─── Series ──────────────────────────────────────────────────────────

/// In-memory [`SeriesStore`].
#[derive(Debug, Default)]
pub struct MemorySeriesStore {
    rows: Mutex<HashMap<SeriesId, Series>>,
}

impl MemorySeriesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a series, returning its id.
    pub fn insert(&self, series: Series) -> SeriesId {
        let id = series.id;
        self.rows.lock().insert(id, series);
        id
    }

    /// Number of series currently stored.
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    /// Whether the store holds no series.
    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl SeriesStore for MemorySeriesStore {
    fn get(&self, id: SeriesId) -> Result<Series, StoreError> {
        self.rows
            .lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_siblings(
        &self,
        main_event_id: EventId,
        exclude: Option<SeriesId>,
    ) -> Result<Vec<Series>, StoreError> {
        let rows = self.rows.lock();
        let mut siblings: Vec<Series> = rows
            .values()
            .filter(|s| s.main_event_id == main_event_id && Some(s.id) != exclude)
            .cloned()
            .collect();
        siblings.sort_by_key(|s| (s.start_date, s.name.clone()));
        Ok(siblings)
    }

    fn create(&self, series: Series) -> Result<Series, StoreError> {
        let mut rows = self.rows.lock();
        if rows.contains_key(&series.id) {
            return Err(StoreError::Conflict(series.id.to_string()));
        }
        rows.insert(series.id, series.clone());
        Ok(series)
    }

    fn update(&self, series: Series) -> Result<Series, StoreError> {
        let mut rows = self.rows.lock();
        if !rows.contains_key(&series.id) {
            return Err(StoreError::NotFound(series.id.to_string()));
        }
        rows.insert(series.id, series.clone());
        Ok(series)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
