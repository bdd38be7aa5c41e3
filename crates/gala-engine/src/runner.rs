//! # Periodic Sweep Runner
//!
//! Drives the auto-transition sweeper on a fixed interval, independent of
//! any user request. One pass at a time: the tick behavior is `Skip`, so
//! a pass that outlives its interval swallows the missed ticks instead of
//! stacking concurrent passes over the same event set.
//!
//! The runner is the only async surface in the workspace. Spawn it as a
//! task and abort the handle to stop it; a pass already in flight runs to
//! completion (there is no per-transition cancellation).

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use gala_core::Clock;

use crate::store::EventStore;
use crate::sweep::AutoTransitionSweeper;

/// Periodic driver for [`AutoTransitionSweeper`].
#[derive(Debug)]
pub struct SweepRunner {
    interval: Duration,
}

impl SweepRunner {
    /// A runner firing every `interval`. Production deployments use one
    /// to five minutes.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run sweep passes forever.
    ///
    /// Pass failures are logged and the loop continues — a broken store
    /// read this minute should not kill the sweep for the day.
    pub async fn run<S: EventStore, C: Clock>(self, sweeper: AutoTransitionSweeper<S, C>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            match sweeper.run() {
                Ok(outcome) => {
                    if outcome.total() > 0 {
                        tracing::info!(
                            to_pre_event = outcome.to_pre_event,
                            to_live = outcome.to_live,
                            to_closing = outcome.to_closing,
                            "auto-transition sweep complete"
                        );
                    }
                }
                Err(error) => {
                    tracing::error!(error = %error, "auto-transition sweep failed");
                }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
