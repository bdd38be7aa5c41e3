//! # gala-engine — Store-Backed Orchestration
//!
//! Wires the pure logic of `gala-state` and `gala-schedule` to the storage
//! seam. This is the crate an HTTP handler or form controller talks to.
//!
//! ## Modules
//!
//! - **`store`**: the `EventStore`/`SeriesStore` traits this engine
//!   consumes and the `StoreError` it propagates untouched. Persistence
//!   itself lives with the collaborator that implements the traits.
//! - **`memory`**: in-memory reference stores (mutex over a map) for
//!   tests, examples, and local development.
//! - **`lifecycle`**: `LifecycleService` — load, transition, commit, with
//!   the status write and the history append in one store call.
//! - **`sweep`**: the time-driven `AutoTransitionSweeper` and its pure
//!   trigger function.
//! - **`runner`**: the periodic task driving the sweeper on a fixed
//!   interval, one pass at a time.
//! - **`schedule_service`**: store-backed series validation, sequence
//!   computation, and the save flow with explicit partial-success
//!   reporting for the parent-window extension write.
//!
//! ## Design
//!
//! No service here owns long-lived mutable state: each call fetches
//! snapshots, runs pure logic against the injected [`Clock`], and writes
//! results back through the store seam. Conflicting writes to the same
//! record are the store's to serialize.
//!
//! [`Clock`]: gala_core::Clock

pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod runner;
pub mod schedule_service;
pub mod store;
pub mod sweep;

// ─── Re-exports ─────────────────────────────────────────────────────

pub use error::EngineError;
pub use lifecycle::LifecycleService;
pub use memory::{MemoryEventStore, MemorySeriesStore};
pub use runner::SweepRunner;
pub use schedule_service::{SaveOutcome, SavedSeries, ScheduleService, WindowUpdate};
pub use store::{EventStore, SeriesStore, StoreError};
pub use sweep::{auto_transition_target, AutoTransitionSweeper, SweepOutcome};
