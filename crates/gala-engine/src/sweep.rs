//! # Auto-Transition Sweep
//!
//! Applies time-driven lifecycle transitions without manual intervention:
//!
//! - `published` events entering the 24-hour window before their start
//!   move to `pre_event`;
//! - `pre_event` events whose start has arrived move to `live`;
//! - `live` events whose end has passed move to `closing`.
//!
//! The trigger decision is the pure function [`auto_transition_target`];
//! the sweeper wraps it with candidate listing, commit, per-event failure
//! isolation, and outcome counting. A pass is idempotent — once an event
//! has advanced, its trigger condition no longer holds, so an immediate
//! second pass performs zero transitions.

use chrono::Duration;
use serde::Serialize;

use gala_core::{ActorId, Clock, Timestamp};
use gala_state::{Event, EventStatus};

use crate::store::{EventStore, StoreError};

/// Hours before the start at which a published event becomes `pre_event`.
pub const PRE_EVENT_LEAD_HOURS: i64 = 24;

// ─── Trigger ─────────────────────────────────────────────────────────

/// The transition the sweep should apply to `event` at `now`, if any.
///
/// Targets come from the same lifecycle edge table as manual transitions;
/// this function only decides *when*, never *whether an edge exists*.
pub fn auto_transition_target(event: &Event, now: Timestamp) -> Option<(EventStatus, &'static str)> {
    match event.status {
        EventStatus::Published => {
            let lead_end = now.plus(Duration::hours(PRE_EVENT_LEAD_HOURS));
            if now < event.start_date && event.start_date <= lead_end {
                Some((EventStatus::PreEvent, "24h before start"))
            } else {
                None
            }
        }
        EventStatus::PreEvent => {
            (event.start_date <= now).then_some((EventStatus::Live, "event started"))
        }
        EventStatus::Live => {
            (event.end_date <= now).then_some((EventStatus::Closing, "event ended"))
        }
        _ => None,
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────

/// Aggregate counts from one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    /// Events moved `published` → `pre_event`.
    pub to_pre_event: usize,
    /// Events moved `pre_event` → `live`.
    pub to_live: usize,
    /// Events moved `live` → `closing`.
    pub to_closing: usize,
}

impl SweepOutcome {
    /// Total transitions applied in the pass.
    pub fn total(&self) -> usize {
        self.to_pre_event + self.to_live + self.to_closing
    }
}

// ─── Sweeper ─────────────────────────────────────────────────────────

/// One-pass executor of time-driven transitions over all eligible events.
#[derive(Debug)]
pub struct AutoTransitionSweeper<S, C> {
    store: S,
    clock: C,
}

impl<S: EventStore, C: Clock> AutoTransitionSweeper<S, C> {
    /// Create a sweeper over `store` reading time from `clock`.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Run one sweep pass.
    ///
    /// Events are evaluated independently: a store failure or a rejected
    /// transition on one event is logged and the pass continues with the
    /// rest. Only a failure to list the candidates at all aborts the pass.
    pub fn run(&self) -> Result<SweepOutcome, StoreError> {
        let candidates = self.store.list_auto_transition_candidates()?;
        let now = self.clock.now();
        let mut outcome = SweepOutcome::default();

        for mut event in candidates {
            let Some((target, reason)) = auto_transition_target(&event, now) else {
                continue;
            };

            let record = match event.attempt_transition(target, reason, ActorId::system(), now) {
                Ok(record) => record,
                Err(error) => {
                    // Trigger targets are edges of the lifecycle table; a
                    // rejection means the snapshot changed under us.
                    tracing::warn!(event_id = %event.id, error = %error, "sweep: transition rejected");
                    continue;
                }
            };

            match self.store.commit_transition(&event, &record) {
                Ok(_) => {
                    tracing::info!(
                        event_id = %event.id,
                        to = %target,
                        reason = %reason,
                        "sweep: auto transition applied"
                    );
                    match target {
                        EventStatus::PreEvent => outcome.to_pre_event += 1,
                        EventStatus::Live => outcome.to_live += 1,
                        EventStatus::Closing => outcome.to_closing += 1,
                        _ => {}
                    }
                }
                Err(error) => {
                    tracing::warn!(event_id = %event.id, error = %error, "sweep: commit failed");
                }
            }
        }

        Ok(outcome)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
