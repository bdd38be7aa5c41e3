//! # Event Lifecycle End-to-End
//!
//! Drives one event through its whole life the way production does:
//! manual transitions through the lifecycle service where an organizer
//! acts, sweep passes where the clock acts, capability checks at each
//! stop, and a full audit trail at the end.

use std::sync::Arc;

use chrono::Duration;

use gala_core::{ActorId, EventId, FixedClock, Timestamp};
use gala_engine::{AutoTransitionSweeper, EventStore as _, LifecycleService, MemoryEventStore};
use gala_state::{allowed_operations, Event, EventStatus};

fn t(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn seed(store: &MemoryEventStore) -> EventId {
    store.insert(Event::new_draft(
        "Harbor Lights Festival",
        t("2026-06-15T18:00:00Z"),
        t("2026-06-15T23:00:00Z"),
        t("2026-05-01T09:00:00Z"),
    ))
}

#[test]
fn full_lifecycle_draft_to_archived() {
    let store = Arc::new(MemoryEventStore::new());
    let clock = Arc::new(FixedClock::at(t("2026-05-01T10:00:00Z")));
    let service = LifecycleService::new(store.clone(), clock.clone());
    let sweeper = AutoTransitionSweeper::new(store.clone(), clock.clone());
    let organizer = ActorId::new("user:organizer");

    let id = seed(&store);
    assert!(allowed_operations(EventStatus::Draft).can_delete);

    // Organizer publishes six weeks out.
    service
        .attempt_transition(id, EventStatus::Published, "tickets on sale", organizer.clone())
        .unwrap();
    assert!(allowed_operations(EventStatus::Published).can_add_series);

    // Nothing for the sweep to do yet.
    assert_eq!(sweeper.run().unwrap().total(), 0);

    // Twelve hours before doors: the sweep opens pre-event.
    clock.set(t("2026-06-15T06:00:00Z"));
    let outcome = sweeper.run().unwrap();
    assert_eq!(outcome.to_pre_event, 1);
    assert!(allowed_operations(EventStatus::PreEvent).can_accept_checkins);

    // Doors open.
    clock.set(t("2026-06-15T18:00:00Z"));
    assert_eq!(sweeper.run().unwrap().to_live, 1);
    let live = store.get(id).unwrap();
    assert_eq!(live.status, EventStatus::Live);
    assert!(!allowed_operations(live.status).can_edit);

    // The night ends.
    clock.set(t("2026-06-16T00:30:00Z"));
    assert_eq!(sweeper.run().unwrap().to_closing, 1);

    // Operations closes out and archives.
    service
        .attempt_transition(id, EventStatus::Closed, "settlement complete", organizer.clone())
        .unwrap();
    service
        .attempt_transition(id, EventStatus::Archived, "season over", organizer.clone())
        .unwrap();

    let archived = store.get(id).unwrap();
    assert!(archived.status.is_terminal());
    assert_eq!(archived.status_changed_by, Some(organizer));

    // Audit trail: one record per hop, in order, mixed actors.
    let history = service.transition_history(id).unwrap();
    let hops: Vec<(EventStatus, EventStatus)> = history
        .iter()
        .map(|r| (r.from_status, r.to_status))
        .collect();
    assert_eq!(
        hops,
        vec![
            (EventStatus::Draft, EventStatus::Published),
            (EventStatus::Published, EventStatus::PreEvent),
            (EventStatus::PreEvent, EventStatus::Live),
            (EventStatus::Live, EventStatus::Closing),
            (EventStatus::Closing, EventStatus::Closed),
            (EventStatus::Closed, EventStatus::Archived),
        ]
    );
    assert_eq!(history[1].changed_by, ActorId::system());
    assert_eq!(history[1].reason, "24h before start");
}

#[test]
fn sweep_leaves_opted_out_events_alone() {
    let store = Arc::new(MemoryEventStore::new());
    let clock = Arc::new(FixedClock::at(t("2026-06-15T17:00:00Z")));
    let sweeper = AutoTransitionSweeper::new(store.clone(), clock);

    let mut manual = Event::new_draft(
        "Invite-Only Preview",
        t("2026-06-15T18:00:00Z"),
        t("2026-06-15T22:00:00Z"),
        t("2026-05-01T09:00:00Z"),
    );
    manual.status = EventStatus::Published;
    manual.auto_transition_enabled = false;
    let id = store.insert(manual);

    assert_eq!(sweeper.run().unwrap().total(), 0);
    assert_eq!(store.get(id).unwrap().status, EventStatus::Published);
}

#[test]
fn rollback_from_pre_event_then_resweep() {
    let store = Arc::new(MemoryEventStore::new());
    let clock = Arc::new(FixedClock::at(t("2026-06-15T06:00:00Z")));
    let service = LifecycleService::new(store.clone(), clock.clone());
    let sweeper = AutoTransitionSweeper::new(store.clone(), clock.clone());

    let mut event = Event::new_draft(
        "Harbor Lights Festival",
        t("2026-06-15T18:00:00Z"),
        t("2026-06-15T23:00:00Z"),
        t("2026-05-01T09:00:00Z"),
    );
    event.status = EventStatus::Published;
    let id = store.insert(event);

    assert_eq!(sweeper.run().unwrap().to_pre_event, 1);

    // Venue delay: organizer pushes the start a day and rolls back.
    store
        .update_window(id, Some(t("2026-06-16T18:00:00Z")), Some(t("2026-06-16T23:00:00Z")))
        .unwrap();
    service
        .attempt_transition(
            id,
            EventStatus::Published,
            "start postponed",
            ActorId::new("user:ops"),
        )
        .unwrap();

    // Same sweep clock: the new start is outside the 24h window.
    assert_eq!(sweeper.run().unwrap().total(), 0);

    // Next day the window opens again.
    clock.advance(Duration::hours(24));
    assert_eq!(sweeper.run().unwrap().to_pre_event, 1);
}
