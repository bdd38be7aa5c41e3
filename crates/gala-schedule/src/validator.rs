//! # Series Schedule Validator
//!
//! The ordered check cascade for a candidate series window:
//!
//! 1. both dates parse as RFC 3339 instants;
//! 2. the start is not in the past (edits of already-scheduled series
//!    exempt);
//! 3. the end is strictly after the start;
//! 4. a start before the parent event proposes extending the parent's
//!    start backward (warning, non-blocking);
//! 5. an end after the parent event proposes extending the parent's end
//!    forward (warning, non-blocking);
//! 6. overlap against sibling series, advisory or strict per
//!    [`OverlapPolicy`].
//!
//! Checks 1-3 are hard failures and short-circuit: the first one to fail
//! is the only error reported. Checks 4-6 accumulate.
//!
//! The parent window is only ever widened by this module's proposals,
//! never narrowed, and the proposal is carried in the result for the
//! caller to apply explicitly — accepting an extension is a caller
//! decision, not a side effect of validating.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gala_core::Timestamp;
use gala_state::{Event, Series};

// ─── Input ───────────────────────────────────────────────────────────

/// A candidate series window as received from a form submission or a
/// batch-upload row. Dates arrive as raw strings so that malformed input
/// surfaces as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInput {
    /// Display name; used in overlap messages and as the sequence
    /// tie-break key. Optional on the wire.
    pub name: Option<String>,
    /// Proposed start, RFC 3339.
    pub start_date: String,
    /// Proposed end, RFC 3339.
    pub end_date: String,
}

impl SeriesInput {
    /// Parse both date fields, reporting the first malformed one.
    ///
    /// Lenient parsing: any RFC 3339 offset is accepted and normalized to
    /// UTC, matching what browsers and spreadsheets emit.
    pub fn parse_window(&self) -> Result<(Timestamp, Timestamp), ScheduleError> {
        let start = Timestamp::parse_lenient(&self.start_date).map_err(|_| {
            ScheduleError::InvalidDateFormat {
                field: DateField::StartDate,
                value: self.start_date.clone(),
            }
        })?;
        let end = Timestamp::parse_lenient(&self.end_date).map_err(|_| {
            ScheduleError::InvalidDateFormat {
                field: DateField::EndDate,
                value: self.end_date.clone(),
            }
        })?;
        Ok((start, end))
    }

    /// The display name, or an empty string when none was supplied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Which date field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// The `start_date` field.
    StartDate,
    /// The `end_date` field.
    EndDate,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        })
    }
}

// ─── Errors and Warnings ─────────────────────────────────────────────

/// Hard validation failures. Any of these blocks persistence.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ScheduleError {
    /// A date field did not parse as an RFC 3339 instant.
    #[error("{field} is not a valid date/time: {value:?}")]
    InvalidDateFormat {
        /// The offending field.
        field: DateField,
        /// The raw input.
        value: String,
    },

    /// The proposed start is in the past.
    #[error("series cannot start in the past (start {start}, now {now})")]
    StartsInPast {
        /// Proposed start.
        start: Timestamp,
        /// The validation-time clock reading.
        now: Timestamp,
    },

    /// The proposed end is not after the start.
    #[error("series must end after it starts (start {start}, end {end})")]
    EndBeforeStart {
        /// Proposed start.
        start: Timestamp,
        /// Proposed end.
        end: Timestamp,
    },

    /// The window overlaps a sibling series. Raised only under
    /// [`OverlapPolicy::Strict`]; advisory otherwise.
    #[error("series overlaps sibling {name:?} ({start} to {end})")]
    OverlapsSibling {
        /// The overlapped sibling's name.
        name: String,
        /// The sibling's start.
        start: Timestamp,
        /// The sibling's end.
        end: Timestamp,
    },
}

impl ScheduleError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::StartsInPast { .. } => "starts_in_past",
            Self::EndBeforeStart { .. } => "end_before_start",
            Self::OverlapsSibling { .. } => "overlaps_sibling",
        }
    }
}

/// Advisory findings. None of these block persistence, but the caller is
/// expected to surface them and to apply proposed extensions explicitly.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ScheduleWarning {
    /// The series starts before the parent event; the parent's start
    /// would be extended backward to cover it.
    #[error("series starts before the main event ({start} < {main_start}); main event start will be extended")]
    StartsBeforeMainEvent {
        /// Proposed series start.
        start: Timestamp,
        /// Current parent start.
        main_start: Timestamp,
    },

    /// The series ends after the parent event; the parent's end would be
    /// extended forward to cover it.
    #[error("series ends after the main event ({end} > {main_end}); main event end will be extended")]
    ExtendsMainEvent {
        /// Proposed series end.
        end: Timestamp,
        /// Current parent end.
        main_end: Timestamp,
    },

    /// The window overlaps a sibling series (advisory form).
    #[error("series overlaps sibling {name:?} ({start} to {end})")]
    OverlapsSibling {
        /// The overlapped sibling's name.
        name: String,
        /// The sibling's start.
        start: Timestamp,
        /// The sibling's end.
        end: Timestamp,
    },
}

impl ScheduleWarning {
    /// Stable machine-readable code for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StartsBeforeMainEvent { .. } => "starts_before_main_event",
            Self::ExtendsMainEvent { .. } => "extends_main_event",
            Self::OverlapsSibling { .. } => "overlaps_sibling",
        }
    }
}

// ─── Configuration ───────────────────────────────────────────────────

/// How sibling overlap is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Overlaps are reported as warnings and do not block. Default:
    /// parallel tracks inside one event are a legitimate schedule.
    #[default]
    Advisory,
    /// Overlaps are hard errors.
    Strict,
}

/// Validator configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Sibling overlap handling.
    pub overlap_policy: OverlapPolicy,
}

// ─── Result ──────────────────────────────────────────────────────────

/// Outcome of validating one candidate series window.
///
/// Errors block the save; warnings do not. When the candidate falls
/// outside the parent window, `auto_extend_main_event` is set together
/// with the proposed replacement bound(s) — the parent is widened, never
/// narrowed, and only when the caller applies the proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleValidation {
    /// Whether the candidate may be persisted.
    pub is_valid: bool,
    /// Hard failures, in check order.
    pub errors: Vec<ScheduleError>,
    /// Advisory findings, in check order.
    pub warnings: Vec<ScheduleWarning>,
    /// Whether persisting this candidate requires widening the parent.
    pub auto_extend_main_event: bool,
    /// Proposed new parent start (earlier than the current one).
    pub new_main_event_start: Option<Timestamp>,
    /// Proposed new parent end (later than the current one).
    pub new_main_event_end: Option<Timestamp>,
}

impl ScheduleValidation {
    /// A passing result with no findings.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            auto_extend_main_event: false,
            new_main_event_start: None,
            new_main_event_end: None,
        }
    }

    /// A failed result carrying a single error.
    pub fn fail(error: ScheduleError) -> Self {
        let mut result = Self::ok();
        result.add_error(error);
        result
    }

    /// Add a hard failure. Marks the result invalid.
    pub fn add_error(&mut self, error: ScheduleError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add an advisory finding (does not affect validity).
    pub fn add_warning(&mut self, warning: ScheduleWarning) {
        self.warnings.push(warning);
    }
}

// ─── Validation ──────────────────────────────────────────────────────

/// Validate one candidate series window against its parent event and
/// sibling series.
///
/// `siblings` must already exclude the series being edited (the store
/// query takes an exclusion id); `is_edit` additionally exempts the
/// candidate from the past-start check, since an already-scheduled series
/// keeps its original start when other fields are edited.
///
/// Pure: the same inputs always produce the same result.
pub fn validate_series(
    input: &SeriesInput,
    parent: &Event,
    siblings: &[Series],
    now: Timestamp,
    is_edit: bool,
    config: &ValidatorConfig,
) -> ScheduleValidation {
    // Checks 1-3: hard failures, first one wins.
    let (start, end) = match input.parse_window() {
        Ok(window) => window,
        Err(error) => return ScheduleValidation::fail(error),
    };

    if !is_edit && start < now {
        return ScheduleValidation::fail(ScheduleError::StartsInPast { start, now });
    }

    if end <= start {
        return ScheduleValidation::fail(ScheduleError::EndBeforeStart { start, end });
    }

    let mut result = ScheduleValidation::ok();

    // Check 4: starting before the parent widens the parent backward.
    if start < parent.start_date {
        result.add_warning(ScheduleWarning::StartsBeforeMainEvent {
            start,
            main_start: parent.start_date,
        });
        result.auto_extend_main_event = true;
        result.new_main_event_start = Some(start);
    }

    // Check 5: ending after the parent widens the parent forward.
    if end > parent.end_date {
        result.add_warning(ScheduleWarning::ExtendsMainEvent {
            end,
            main_end: parent.end_date,
        });
        result.auto_extend_main_event = true;
        result.new_main_event_end = Some(end);
    }

    // Check 6: sibling overlap over half-open windows [start, end).
    for sibling in siblings {
        if windows_overlap(start, end, sibling.start_date, sibling.end_date) {
            match config.overlap_policy {
                OverlapPolicy::Strict => result.add_error(ScheduleError::OverlapsSibling {
                    name: sibling.name.clone(),
                    start: sibling.start_date,
                    end: sibling.end_date,
                }),
                OverlapPolicy::Advisory => {
                    result.add_warning(ScheduleWarning::OverlapsSibling {
                        name: sibling.name.clone(),
                        start: sibling.start_date,
                        end: sibling.end_date,
                    })
                }
            }
        }
    }

    result
}

/// Half-open interval overlap: `[a_start, a_end)` meets `[b_start, b_end)`.
/// Back-to-back windows (one ends exactly when the next starts) do not
/// overlap.
fn windows_overlap(
    a_start: Timestamp,
    a_end: Timestamp,
    b_start: Timestamp,
    b_end: Timestamp,
) -> bool {
    a_start < b_end && b_start < a_end
}

// ─── Batch Validation ────────────────────────────────────────────────

/// Outcome of validating a batch of candidates as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchValidation {
    /// Whether every candidate passed.
    pub valid: bool,
    /// Per-candidate results, in input order.
    pub results: Vec<ScheduleValidation>,
}

/// Validate a batch of candidates (one upload) against a running view of
/// the parent window and the growing sibling set.
///
/// Each valid candidate immediately becomes a sibling for the candidates
/// after it, and any extension it proposes widens the working parent
/// window, so overlap and extension findings accumulate the way they
/// would if the rows were submitted one at a time.
///
/// One invalid row does not stop the batch; its result is recorded and
/// the remaining rows are validated without it.
pub fn batch_validate(
    inputs: &[SeriesInput],
    parent: &Event,
    siblings: &[Series],
    now: Timestamp,
    config: &ValidatorConfig,
) -> BatchValidation {
    let mut working_parent = parent.clone();
    let mut working_siblings: Vec<Series> = siblings.to_vec();
    let mut results = Vec::with_capacity(inputs.len());
    let mut valid = true;

    for input in inputs {
        let result = validate_series(input, &working_parent, &working_siblings, now, false, config);

        if result.is_valid {
            // Safe: a valid result implies the window parsed.
            if let Ok((start, end)) = input.parse_window() {
                if let Some(new_start) = result.new_main_event_start {
                    working_parent.start_date = new_start;
                }
                if let Some(new_end) = result.new_main_event_end {
                    working_parent.end_date = new_end;
                }
                working_siblings.push(Series::new_draft(
                    working_parent.id,
                    input.display_name(),
                    start,
                    end,
                ));
            }
        } else {
            valid = false;
        }

        results.push(result);
    }

    BatchValidation { valid, results }
}

// ─── Tests ───────────────────────────────────────────────────────────
