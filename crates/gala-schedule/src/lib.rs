//! # gala-schedule — Series Scheduling Rules
//!
//! Decides whether a proposed series time window is acceptable inside its
//! parent event, what side effects it implies for the parent's window, and
//! where the series sits in the display order of its siblings.
//!
//! ## Modules
//!
//! - **`validator`**: the ordered check cascade over a candidate window
//!   (date parsing, past-start, inverted window, parent-window fit,
//!   sibling overlap), producing a [`ScheduleValidation`] whose errors
//!   block persistence and whose warnings do not. Includes the batch
//!   variant that validates an upload against a running view of the
//!   parent window and the growing sibling set.
//!
//! - **`sequence`**: the 1-based chronological position of a series among
//!   its active siblings, ordered by `(start_date, name)`.
//!
//! ## Design
//!
//! Everything here is a pure function of caller-supplied snapshots plus an
//! explicit `now` — no store handles, no interior state, no wall-clock
//! reads. The engine crate owns fetching the snapshots; form layers may
//! call these functions on every keystroke without side effects.

pub mod sequence;
pub mod validator;

// ─── Validator re-exports ───────────────────────────────────────────

pub use validator::{
    batch_validate, validate_series, BatchValidation, DateField, OverlapPolicy, ScheduleError,
    ScheduleValidation, ScheduleWarning, SeriesInput, ValidatorConfig,
};

// ─── Sequence re-exports ────────────────────────────────────────────

pub use sequence::{assign_sequence_numbers, compute_sequence_number};
