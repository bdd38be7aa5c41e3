//! # Schedule Service
//!
//! Store-backed entry points for series scheduling: validate a candidate
//! against live parent/sibling data, compute its sequence number, and the
//! save flow that persists a valid candidate and applies any parent-window
//! extension.
//!
//! The save flow performs two writes against two stores (series row, then
//! conditional event window). Store traits cannot span a transaction, so
//! the window write is idempotent (it sets absolute bounds, not deltas)
//! and its failure is surfaced as [`WindowUpdate::Failed`] for the caller
//! to retry — never folded into a blanket success.

use gala_core::{Clock, EventId, SeriesId};
use gala_schedule::{
    batch_validate, compute_sequence_number, validate_series, BatchValidation, ScheduleValidation,
    SeriesInput, ValidatorConfig,
};
use gala_state::{Series, SeriesStatus};

use crate::error::EngineError;
use crate::store::{EventStore, SeriesStore, StoreError};

/// Outcome of the conditional parent-window write in [`ScheduleService::save_series`].
#[derive(Debug)]
pub enum WindowUpdate {
    /// The candidate fit inside the parent window; nothing to write.
    NotNeeded,
    /// The parent window was widened; the committed snapshot is returned.
    Applied(gala_state::Event),
    /// The series row was written but the window write failed. The saved
    /// series is valid; the caller should retry the extension.
    Failed(StoreError),
}

/// A persisted series together with the validation findings and the
/// outcome of the window write.
#[derive(Debug)]
pub struct SavedSeries {
    /// The committed series row.
    pub series: Series,
    /// Warnings the caller should surface (extensions, overlaps).
    pub validation: ScheduleValidation,
    /// What happened to the parent window.
    pub window_update: WindowUpdate,
}

/// Outcome of a save request.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Validation failed; nothing was written.
    Rejected(ScheduleValidation),
    /// The series was persisted.
    Saved(Box<SavedSeries>),
}

/// Store-backed series scheduling operations.
#[derive(Debug)]
pub struct ScheduleService<ES, SS, C> {
    events: ES,
    series: SS,
    clock: C,
    config: ValidatorConfig,
}

impl<ES: EventStore, SS: SeriesStore, C: Clock> ScheduleService<ES, SS, C> {
    /// Create a service with the default validator configuration.
    pub fn new(events: ES, series: SS, clock: C) -> Self {
        Self {
            events,
            series,
            clock,
            config: ValidatorConfig::default(),
        }
    }

    /// Override the validator configuration.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate one candidate against the stored parent event and its
    /// sibling series. `edit_of` marks re-validation of an existing
    /// series: that series is excluded from the sibling set and exempt
    /// from the past-start check.
    pub fn validate_series(
        &self,
        input: &SeriesInput,
        main_event_id: EventId,
        edit_of: Option<SeriesId>,
    ) -> Result<ScheduleValidation, EngineError> {
        let parent = self.events.get(main_event_id)?;
        let siblings = self.series.list_siblings(main_event_id, edit_of)?;
        Ok(validate_series(
            input,
            &parent,
            &siblings,
            self.clock.now(),
            edit_of.is_some(),
            &self.config,
        ))
    }

    /// Validate a whole upload against a running view of the parent
    /// window and the growing sibling set.
    pub fn batch_validate_series(
        &self,
        inputs: &[SeriesInput],
        main_event_id: EventId,
    ) -> Result<BatchValidation, EngineError> {
        let parent = self.events.get(main_event_id)?;
        let siblings = self.series.list_siblings(main_event_id, None)?;
        Ok(batch_validate(
            inputs,
            &parent,
            &siblings,
            self.clock.now(),
            &self.config,
        ))
    }

    /// The sequence number a candidate would receive right now.
    ///
    /// Recomputable per keystroke: reads only, no writes.
    pub fn compute_sequence_number(
        &self,
        input: &SeriesInput,
        main_event_id: EventId,
        edit_of: Option<SeriesId>,
    ) -> Result<u32, EngineError> {
        let (start, _) = input.parse_window()?;
        let siblings = self.series.list_siblings(main_event_id, edit_of)?;
        Ok(compute_sequence_number(
            start,
            input.display_name(),
            &siblings,
            None,
            self.clock.now(),
        ))
    }

    /// Validate and persist a candidate series; apply any parent-window
    /// extension the validation proposed.
    ///
    /// Hard errors reject the save with nothing written. On success the
    /// series row is committed first; the conditional window write is
    /// reported separately via [`WindowUpdate`] so a partial failure is
    /// visible to the caller instead of disguised as success.
    pub fn save_series(
        &self,
        input: &SeriesInput,
        main_event_id: EventId,
        edit_of: Option<SeriesId>,
    ) -> Result<SaveOutcome, EngineError> {
        let parent = self.events.get(main_event_id)?;
        let siblings = self.series.list_siblings(main_event_id, edit_of)?;
        let now = self.clock.now();

        let validation = validate_series(
            input,
            &parent,
            &siblings,
            now,
            edit_of.is_some(),
            &self.config,
        );
        if !validation.is_valid {
            return Ok(SaveOutcome::Rejected(validation));
        }

        // A valid result implies the window parsed.
        let (start, end) = input.parse_window()?;

        let sequence = compute_sequence_number(start, input.display_name(), &siblings, None, now);

        let series = match edit_of {
            Some(id) => {
                let mut existing = self.series.get(id)?;
                existing.name = input.display_name().to_string();
                existing.start_date = start;
                existing.end_date = end;
                existing.sequence_number = sequence;
                self.series.update(existing)?
            }
            None => {
                let mut fresh =
                    Series::new_draft(main_event_id, input.display_name(), start, end);
                fresh.status = SeriesStatus::Scheduled;
                fresh.sequence_number = sequence;
                self.series.create(fresh)?
            }
        };

        let window_update = if validation.auto_extend_main_event {
            match self.events.update_window(
                main_event_id,
                validation.new_main_event_start,
                validation.new_main_event_end,
            ) {
                Ok(event) => {
                    tracing::info!(
                        event_id = %event.id,
                        start = %event.start_date,
                        end = %event.end_date,
                        "main event window extended for series"
                    );
                    WindowUpdate::Applied(event)
                }
                Err(error) => {
                    tracing::warn!(
                        event_id = %main_event_id,
                        series_id = %series.id,
                        error = %error,
                        "series saved but window extension failed; retry the extension"
                    );
                    WindowUpdate::Failed(error)
                }
            }
        } else {
            WindowUpdate::NotNeeded
        };

        Ok(SaveOutcome::Saved(Box::new(SavedSeries {
            series,
            validation,
            window_update,
        })))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
