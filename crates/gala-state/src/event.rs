//! # Event Publication Lifecycle
//!
//! Models the publication lifecycle of a top-level event:
//!
//! ```text
//! draft ──▶ published ──▶ pre_event ──▶ live ──▶ closing ──▶ closed
//!   │            │            │                                │
//!   │            │            └──▶ published (rollback)        │
//!   │            │                                             ▼
//!   └────────────┴──────────────────────────────────────▶ archived
//! ```
//!
//! `archived` is terminal. The forward path from `live` onward has no
//! shortcuts: a live event must pass through `closing` and `closed` before
//! it can be archived, which is what makes the closing-duties window
//! (settlement, equipment return, report sign-off) unskippable.
//!
//! The edge table lives in [`EventStatus::valid_next_states`] and nowhere
//! else. The auto-transition sweep picks targets and the form handlers
//! validate requests against this same table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use gala_core::{ActorId, EventId, GalaError, Timestamp};

// ─── Event Status ────────────────────────────────────────────────────

/// The publication status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Being drafted; visible only to organizers.
    Draft,
    /// Published and publicly listed; not yet near its start.
    Published,
    /// Inside the 24-hour window before the start; check-in opens.
    PreEvent,
    /// The event is running.
    Live,
    /// The event has ended; closing duties in progress.
    Closing,
    /// Closing duties complete.
    Closed,
    /// Retired from all listings. Terminal.
    Archived,
}

impl EventStatus {
    /// Returns all statuses in lifecycle order.
    pub fn all() -> &'static [EventStatus] {
        &[
            Self::Draft,
            Self::Published,
            Self::PreEvent,
            Self::Live,
            Self::Closing,
            Self::Closed,
            Self::Archived,
        ]
    }

    /// The set of statuses reachable from this one.
    ///
    /// This table is the single source of truth for the lifecycle. Both
    /// [`Event::attempt_transition`] and the auto-transition sweep consult
    /// it; no other code encodes an edge.
    pub fn valid_next_states(&self) -> &'static [EventStatus] {
        match self {
            Self::Draft => &[Self::Published, Self::Archived],
            Self::Published => &[Self::PreEvent, Self::Archived],
            Self::PreEvent => &[Self::Live, Self::Published],
            Self::Live => &[Self::Closing],
            Self::Closing => &[Self::Closed],
            Self::Closed => &[Self::Archived],
            Self::Archived => &[],
        }
    }

    /// Whether `target` is a permitted next status.
    pub fn can_transition_to(&self, target: EventStatus) -> bool {
        self.valid_next_states().contains(&target)
    }

    /// Whether this is a terminal status (no outgoing edges).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Returns the snake_case string identifier for this status.
    ///
    /// Matches the serde serialization format and the values persisted by
    /// the storage layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::PreEvent => "pre_event",
            Self::Live => "live",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = GalaError;

    /// Parse a status from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "pre_event" => Ok(Self::PreEvent),
            "live" => Ok(Self::Live),
            "closing" => Ok(Self::Closing),
            "closed" => Ok(Self::Closed),
            "archived" => Ok(Self::Archived),
            other => Err(GalaError::SchemaValidation(format!(
                "unknown event status: {other:?}"
            ))),
        }
    }
}

// ─── Capability Lookup ───────────────────────────────────────────────

/// What operators may do with an event in a given status.
///
/// A pure lookup, not a transition — the access-control layer combines
/// this with the caller's role to decide a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedOperations {
    /// Event details may be edited.
    pub can_edit: bool,
    /// The event may be deleted outright.
    pub can_delete: bool,
    /// New series may be added under the event.
    pub can_add_series: bool,
    /// Attendee check-ins are accepted.
    pub can_accept_checkins: bool,
    /// Post-event reports are available.
    pub can_view_reports: bool,
}

/// Capability set for each lifecycle status.
pub fn allowed_operations(status: EventStatus) -> AllowedOperations {
    match status {
        EventStatus::Draft => AllowedOperations {
            can_edit: true,
            can_delete: true,
            can_add_series: true,
            can_accept_checkins: false,
            can_view_reports: false,
        },
        EventStatus::Published => AllowedOperations {
            can_edit: true,
            can_delete: false,
            can_add_series: true,
            can_accept_checkins: false,
            can_view_reports: false,
        },
        EventStatus::PreEvent => AllowedOperations {
            can_edit: true,
            can_delete: false,
            can_add_series: true,
            can_accept_checkins: true,
            can_view_reports: false,
        },
        EventStatus::Live => AllowedOperations {
            can_edit: false,
            can_delete: false,
            can_add_series: false,
            can_accept_checkins: true,
            can_view_reports: true,
        },
        EventStatus::Closing => AllowedOperations {
            can_edit: false,
            can_delete: false,
            can_add_series: false,
            can_accept_checkins: false,
            can_view_reports: true,
        },
        EventStatus::Closed => AllowedOperations {
            can_edit: false,
            can_delete: false,
            can_add_series: false,
            can_accept_checkins: false,
            can_view_reports: true,
        },
        EventStatus::Archived => AllowedOperations {
            can_edit: false,
            can_delete: false,
            can_add_series: false,
            can_accept_checkins: false,
            can_view_reports: true,
        },
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised when driving the event lifecycle.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// Attempted transition is not an edge in the lifecycle table.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: EventStatus,
        /// Requested target status.
        to: EventStatus,
    },

    /// The event does not exist in the store.
    #[error("event not found: {id}")]
    EventNotFound {
        /// The missing event.
        id: EventId,
    },
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of a single lifecycle transition. Append-only; one per
/// successful [`Event::attempt_transition`] call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The event that transitioned.
    pub event_id: EventId,
    /// Status before the transition.
    pub from_status: EventStatus,
    /// Status after the transition.
    pub to_status: EventStatus,
    /// Why the transition happened ("published by organizer",
    /// "24h before start", ...).
    pub reason: String,
    /// Who initiated it.
    pub changed_by: ActorId,
    /// When it happened.
    pub changed_at: Timestamp,
}

// ─── Event ───────────────────────────────────────────────────────────

/// A top-level, time-bounded event with a publication lifecycle.
///
/// `end_date` is not constrained against `start_date` at this layer —
/// the looser top-level window rules live with the form layer, and only
/// series windows get the strict ordering check (`gala-schedule`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Scheduled start.
    pub start_date: Timestamp,
    /// Scheduled end.
    pub end_date: Timestamp,
    /// Current publication status.
    pub status: EventStatus,
    /// Whether the time-driven sweep may advance this event.
    pub auto_transition_enabled: bool,
    /// When the status last changed.
    pub status_changed_at: Timestamp,
    /// Who last changed the status. `None` until the first transition.
    pub status_changed_by: Option<ActorId>,
}

impl Event {
    /// Create a new draft event.
    pub fn new_draft(
        name: impl Into<String>,
        start_date: Timestamp,
        end_date: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            start_date,
            end_date,
            status: EventStatus::Draft,
            auto_transition_enabled: true,
            status_changed_at: created_at,
            status_changed_by: None,
        }
    }

    /// Attempt a lifecycle transition on this snapshot.
    ///
    /// Succeeds iff `target` is an edge from the current status in the
    /// lifecycle table. On success the snapshot's status and audit fields
    /// are updated and the single [`StateTransition`] record is returned
    /// for the caller to persist alongside the event. On failure the
    /// snapshot is untouched.
    pub fn attempt_transition(
        &mut self,
        target: EventStatus,
        reason: impl Into<String>,
        changed_by: ActorId,
        now: Timestamp,
    ) -> Result<StateTransition, TransitionError> {
        if !self.status.can_transition_to(target) {
            return Err(TransitionError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }

        let record = StateTransition {
            event_id: self.id,
            from_status: self.status,
            to_status: target,
            reason: reason.into(),
            changed_by: changed_by.clone(),
            changed_at: now,
        };

        self.status = target;
        self.status_changed_at = now;
        self.status_changed_by = Some(changed_by);
        Ok(record)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
