//! # gala-core — Foundational Types for the Gala Events Stack
//!
//! This crate is the bedrock of the stack. Every other crate in the
//! workspace depends on `gala-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `EventId`, `SeriesId`,
//!    `ActorId` — newtypes with explicit constructors. No bare strings or
//!    UUIDs for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. Local-time handling is a presentation concern
//!    that never enters scheduling logic.
//!
//! 3. **Injected time.** All "now" reads flow through the [`Clock`] trait.
//!    Validation, sequencing, and lifecycle decisions are pure functions of
//!    their inputs plus an explicit clock — never of ambient wall-clock
//!    state. `SystemClock` is the single production implementation;
//!    `FixedClock` makes time a test fixture.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gala-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and the persisted ones
//!   implement `Serialize`/`Deserialize`.

pub mod clock;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::GalaError;
pub use identity::{ActorId, EventId, SeriesId};
pub use temporal::Timestamp;
