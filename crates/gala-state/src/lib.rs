//! # gala-state — Lifecycle State Machines
//!
//! Implements the publication lifecycle of an event and the domain model of
//! its nested series.
//!
//! ## State Machines
//!
//! - **Event** (`event.rs`): `draft → published → pre_event → live →
//!   closing → closed → archived`, with the early-archive branches and the
//!   `pre_event → published` rollback. The edge table in
//!   [`EventStatus::valid_next_states`] is the single source of truth —
//!   manual transitions and the auto-transition sweep both consult it, and
//!   nothing else encodes an edge.
//!
//! - **Series** (`series.rs`): the sub-event model with its own
//!   independent `draft`/`scheduled`/`active` status and the
//!   completed-at predicate used by sequence assignment.
//!
//! ## Design
//!
//! States arrive at runtime from storage and form submissions, so the
//! machine is a runtime-checked enum: [`Event::attempt_transition`]
//! validates the requested edge against the table, mutates the snapshot,
//! and emits exactly one [`StateTransition`] record for the caller to
//! append. A rejected transition leaves the snapshot untouched.

pub mod event;
pub mod series;

// ─── Event re-exports ───────────────────────────────────────────────

pub use event::{
    allowed_operations, AllowedOperations, Event, EventStatus, StateTransition, TransitionError,
};

// ─── Series re-exports ──────────────────────────────────────────────

pub use series::{Series, SeriesStatus};
