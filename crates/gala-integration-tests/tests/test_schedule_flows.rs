//! # Schedule Flows
//!
//! Cross-crate scenarios for series scheduling: the save flow with
//! auto-extension and its round trip, batch uploads against live store
//! state, strict overlap configuration, and sequence numbers observed
//! through the engine.

use std::sync::Arc;

use gala_core::{EventId, FixedClock, Timestamp};
use gala_engine::{
    EventStore as _, MemoryEventStore, MemorySeriesStore, SaveOutcome, ScheduleService,
    WindowUpdate,
};
use gala_schedule::{OverlapPolicy, SeriesInput, ValidatorConfig};
use gala_state::Event;

fn t(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

const NOW: &str = "2026-06-01T12:00:00Z";

type Service = ScheduleService<Arc<MemoryEventStore>, Arc<MemorySeriesStore>, Arc<FixedClock>>;

fn setup() -> (Arc<MemoryEventStore>, EventId, Service) {
    let events = Arc::new(MemoryEventStore::new());
    let series = Arc::new(MemorySeriesStore::new());
    let clock = Arc::new(FixedClock::at(t(NOW)));
    let event_id = events.insert(Event::new_draft(
        "Harbor Lights Festival",
        t("2026-06-15T09:00:00Z"),
        t("2026-06-17T22:00:00Z"),
        t("2026-05-01T09:00:00Z"),
    ));
    let service = ScheduleService::new(events.clone(), series, clock);
    (events, event_id, service)
}

fn input(name: &str, start: &str, end: &str) -> SeriesInput {
    SeriesInput {
        name: Some(name.to_string()),
        start_date: start.to_string(),
        end_date: end.to_string(),
    }
}

fn expect_saved(outcome: SaveOutcome) -> gala_engine::SavedSeries {
    match outcome {
        SaveOutcome::Saved(saved) => *saved,
        SaveOutcome::Rejected(validation) => panic!("unexpected rejection: {validation:?}"),
    }
}

#[test]
fn extension_round_trip_settles() {
    let (events, event_id, service) = setup();

    // A closing night three days past the event's end.
    let candidate = input("Closing Night", "2026-06-19T19:00:00Z", "2026-06-20T22:00:00Z");
    let saved = expect_saved(service.save_series(&candidate, event_id, None).unwrap());

    assert!(saved.validation.auto_extend_main_event);
    assert_eq!(
        saved.validation.new_main_event_end,
        Some(t("2026-06-20T22:00:00Z"))
    );
    assert!(matches!(saved.window_update, WindowUpdate::Applied(_)));
    assert_eq!(events.get(event_id).unwrap().end_date, t("2026-06-20T22:00:00Z"));

    // Re-validating the same window as an edit proposes nothing further.
    let again = service
        .validate_series(&candidate, event_id, Some(saved.series.id))
        .unwrap();
    assert!(again.is_valid);
    assert!(!again.auto_extend_main_event);
    assert_eq!(again.new_main_event_end, None);
}

#[test]
fn backward_extension_widens_the_start() {
    let (events, event_id, service) = setup();

    let saved = expect_saved(
        service
            .save_series(
                &input("Early Load-In", "2026-06-14T07:00:00Z", "2026-06-14T12:00:00Z"),
                event_id,
                None,
            )
            .unwrap(),
    );

    assert_eq!(
        saved.validation.new_main_event_start,
        Some(t("2026-06-14T07:00:00Z"))
    );
    assert_eq!(
        events.get(event_id).unwrap().start_date,
        t("2026-06-14T07:00:00Z")
    );
    // The end is untouched: widened, never narrowed.
    assert_eq!(events.get(event_id).unwrap().end_date, t("2026-06-17T22:00:00Z"));
}

#[test]
fn batch_upload_accumulates_extensions_and_siblings() {
    let (_, event_id, service) = setup();

    let rows = vec![
        input("Day One", "2026-06-15T10:00:00Z", "2026-06-15T20:00:00Z"),
        // Extends the end by a day.
        input("Encore", "2026-06-18T10:00:00Z", "2026-06-18T20:00:00Z"),
        // Inside the window the previous row just widened.
        input("Encore Matinee", "2026-06-18T09:00:00Z", "2026-06-18T10:00:00Z"),
        // Overlaps row one.
        input("Day One Workshops", "2026-06-15T12:00:00Z", "2026-06-15T16:00:00Z"),
    ];

    let batch = service.batch_validate_series(&rows, event_id).unwrap();
    assert!(batch.valid);
    assert!(batch.results[1].auto_extend_main_event);
    assert!(!batch.results[2].auto_extend_main_event, "window already widened in-batch");
    assert_eq!(batch.results[3].warnings.len(), 1);
    assert_eq!(batch.results[3].warnings[0].code(), "overlaps_sibling");
}

#[test]
fn strict_overlap_blocks_the_save() {
    let (_, event_id, service) = setup();
    let service = service.with_config(ValidatorConfig {
        overlap_policy: OverlapPolicy::Strict,
    });

    expect_saved(
        service
            .save_series(
                &input("Main Stage", "2026-06-15T18:00:00Z", "2026-06-15T23:00:00Z"),
                event_id,
                None,
            )
            .unwrap(),
    );

    let outcome = service
        .save_series(
            &input("Second Stage", "2026-06-15T20:00:00Z", "2026-06-16T01:00:00Z"),
            event_id,
            None,
        )
        .unwrap();
    match outcome {
        SaveOutcome::Rejected(validation) => {
            assert_eq!(validation.errors[0].code(), "overlaps_sibling");
        }
        SaveOutcome::Saved(_) => panic!("strict policy must reject the overlap"),
    }
}

#[test]
fn sequence_numbers_follow_the_calendar_not_insertion() {
    let (_, event_id, service) = setup();

    // Inserted out of chronological order.
    let semis = expect_saved(
        service
            .save_series(
                &input("Semis", "2026-06-17T10:00:00Z", "2026-06-17T14:00:00Z"),
                event_id,
                None,
            )
            .unwrap(),
    );
    let quarters = expect_saved(
        service
            .save_series(
                &input("Quarters", "2026-06-16T10:00:00Z", "2026-06-16T14:00:00Z"),
                event_id,
                None,
            )
            .unwrap(),
    );

    // Recomputed positions follow start dates.
    let semis_now = service
        .compute_sequence_number(
            &input("Semis", "2026-06-17T10:00:00Z", "2026-06-17T14:00:00Z"),
            event_id,
            Some(semis.series.id),
        )
        .unwrap();
    let quarters_now = service
        .compute_sequence_number(
            &input("Quarters", "2026-06-16T10:00:00Z", "2026-06-16T14:00:00Z"),
            event_id,
            Some(quarters.series.id),
        )
        .unwrap();
    assert_eq!(semis_now, 2);
    assert_eq!(quarters_now, 1);
}

#[test]
fn completed_series_free_their_slot() {
    let events = Arc::new(MemoryEventStore::new());
    let series = Arc::new(MemorySeriesStore::new());
    let clock = Arc::new(FixedClock::at(t(NOW)));
    let event_id = events.insert(Event::new_draft(
        "Harbor Lights Festival",
        t("2026-06-15T09:00:00Z"),
        t("2026-06-17T22:00:00Z"),
        t("2026-05-01T09:00:00Z"),
    ));
    let service = ScheduleService::new(events, series, clock.clone());

    expect_saved(
        service
            .save_series(
                &input("Opening", "2026-06-15T10:00:00Z", "2026-06-15T12:00:00Z"),
                event_id,
                None,
            )
            .unwrap(),
    );

    let finale = input("Finale", "2026-06-17T10:00:00Z", "2026-06-17T12:00:00Z");

    // Before the opening finishes, the finale ranks second.
    let before = service
        .compute_sequence_number(&finale, event_id, None)
        .unwrap();
    assert_eq!(before, 2);

    // Once the opening has completed it stops occupying a slot.
    // Sequence computation never rejects on time, it only ranks.
    clock.set(t("2026-06-16T00:00:00Z"));
    let after = service
        .compute_sequence_number(&finale, event_id, None)
        .unwrap();
    assert_eq!(after, 1);
}
