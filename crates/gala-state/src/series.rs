//! # Series Domain Model
//!
//! A series is a sub-event nested under a main event: a qualifying round,
//! a workshop track, an evening session. It carries its own time window
//! and its own small status enum, independent of the parent's publication
//! lifecycle.
//!
//! The `sequence_number` field is derived display data — the authoritative
//! ordering is recomputed on demand by `gala-schedule` from the windows of
//! the active siblings, so a stale persisted value can never reorder a
//! listing.

use serde::{Deserialize, Serialize};

use gala_core::{EventId, SeriesId, Timestamp};

// ─── Series Status ───────────────────────────────────────────────────

/// The lifecycle status of a series. Independent of [`EventStatus`]
/// (an event can be live while a late-added series is still a draft).
///
/// [`EventStatus`]: crate::event::EventStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStatus {
    /// Being set up; not shown to attendees.
    Draft,
    /// Validated and scheduled.
    Scheduled,
    /// Running or imminent.
    Active,
}

impl SeriesStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Active => "active",
        }
    }
}

impl std::fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Series ──────────────────────────────────────────────────────────

/// A sub-event nested under a main event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique identifier.
    pub id: SeriesId,
    /// The owning event.
    pub main_event_id: EventId,
    /// Display name; also the tie-break key for sequence assignment.
    pub name: String,
    /// Scheduled start.
    pub start_date: Timestamp,
    /// Scheduled end.
    pub end_date: Timestamp,
    /// Derived 1-based display position among active siblings.
    /// Recomputed on demand; not authoritative.
    pub sequence_number: u32,
    /// Current status.
    pub status: SeriesStatus,
}

impl Series {
    /// Create a new draft series under `main_event_id`.
    pub fn new_draft(
        main_event_id: EventId,
        name: impl Into<String>,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Self {
        Self {
            id: SeriesId::new(),
            main_event_id,
            name: name.into(),
            start_date,
            end_date,
            sequence_number: 0,
            status: SeriesStatus::Draft,
        }
    }

    /// Whether the series is already over at `now`.
    ///
    /// Completed series never occupy a sequence slot; this predicate (not
    /// [`SeriesStatus`]) is what sequence assignment filters on.
    pub fn is_completed_at(&self, now: Timestamp) -> bool {
        self.end_date < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn new_draft_series() {
        let event_id = EventId::new();
        let series = Series::new_draft(
            event_id,
            "Quarterfinals",
            t("2026-06-16T10:00:00Z"),
            t("2026-06-16T14:00:00Z"),
        );
        assert_eq!(series.main_event_id, event_id);
        assert_eq!(series.status, SeriesStatus::Draft);
        assert_eq!(series.sequence_number, 0);
    }

    #[test]
    fn completed_at_is_strict_on_end_date() {
        let series = Series::new_draft(
            EventId::new(),
            "Quarterfinals",
            t("2026-06-16T10:00:00Z"),
            t("2026-06-16T14:00:00Z"),
        );
        // A series ending exactly now still counts as active.
        assert!(!series.is_completed_at(t("2026-06-16T14:00:00Z")));
        assert!(series.is_completed_at(t("2026-06-16T14:00:01Z")));
        assert!(!series.is_completed_at(t("2026-06-16T09:00:00Z")));
    }

    #[test]
    fn status_display() {
        assert_eq!(SeriesStatus::Draft.to_string(), "draft");
        assert_eq!(SeriesStatus::Scheduled.to_string(), "scheduled");
        assert_eq!(SeriesStatus::Active.to_string(), "active");
    }

    #[test]
    fn series_serde_roundtrip() {
        let series = Series::new_draft(
            EventId::new(),
            "Semifinals",
            t("2026-06-17T10:00:00Z"),
            t("2026-06-17T14:00:00Z"),
        );
        let json = serde_json::to_string(&series).unwrap();
        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
