//! # Engine Error Type
//!
//! One enum over the two failure families an engine call can surface:
//! lifecycle rule violations and storage failures. Schedule validation
//! findings are NOT errors — they travel inside result values so batch
//! callers keep processing.

use thiserror::Error;

use gala_schedule::ScheduleError;
use gala_state::TransitionError;

use crate::store::StoreError;

/// Failure of a store-backed engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A lifecycle rule rejected the request.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// A candidate date failed to parse in an operation that has no
    /// validation-result channel to report it through (sequence
    /// computation). The validating operations return findings in their
    /// results instead.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// The storage collaborator failed; propagated untouched, no retries
    /// at this layer.
    #[error(transparent)]
    Store(#[from] StoreError),
}
