//! # Lifecycle Service
//!
//! Store-backed execution of manual lifecycle transitions: load the
//! snapshot, apply the pure state-machine rule, commit snapshot and
//! history record through one store call.

use gala_core::{ActorId, Clock, EventId};
use gala_state::{Event, EventStatus, StateTransition, TransitionError};

use crate::error::EngineError;
use crate::store::{EventStore, StoreError};

/// Executes lifecycle transitions against an [`EventStore`].
///
/// Stateless: every call fetches a fresh snapshot, so concurrent callers
/// only contend inside the store, which serializes per-record writes.
#[derive(Debug)]
pub struct LifecycleService<S, C> {
    store: S,
    clock: C,
}

impl<S: EventStore, C: Clock> LifecycleService<S, C> {
    /// Create a service over `store` reading time from `clock`.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Attempt to move `event_id` to `target`.
    ///
    /// On success the store holds the new status, the audit fields, and
    /// exactly one appended [`StateTransition`]; the committed snapshot is
    /// returned. An invalid edge or a missing event is reported to the
    /// caller, never silently ignored.
    pub fn attempt_transition(
        &self,
        event_id: EventId,
        target: EventStatus,
        reason: &str,
        actor: ActorId,
    ) -> Result<Event, EngineError> {
        let mut event = match self.store.get(event_id) {
            Ok(event) => event,
            Err(StoreError::NotFound(_)) => {
                return Err(TransitionError::EventNotFound { id: event_id }.into())
            }
            Err(other) => return Err(other.into()),
        };

        let record = event.attempt_transition(target, reason, actor, self.clock.now())?;
        let committed = self.store.commit_transition(&event, &record)?;

        tracing::info!(
            event_id = %committed.id,
            from = %record.from_status,
            to = %record.to_status,
            reason = %record.reason,
            "event lifecycle transition"
        );
        Ok(committed)
    }

    /// The append-only transition history of an event, oldest first.
    pub fn transition_history(
        &self,
        event_id: EventId,
    ) -> Result<Vec<StateTransition>, EngineError> {
        Ok(self.store.transitions(event_id)?)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
