//! Periodic liveness-deadline signaling.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::constants::liveness;

/// Capability to push the hardware liveness deadline forward.
///
/// Implemented by the board layer; the liveness coordinator is the only
/// caller. Implementations must touch nothing but the deadline itself,
/// since they run concurrently with the worker context.
pub trait Watchdog: Send + Sync + 'static {
    /// Extends the deadline by `units` watchdog units.
    fn extend(&self, units: u32);
}

/// Runs a fixed-period timer task that keeps extending the liveness
/// deadline, so that long blocking operations on the worker context
/// (association retries, throughput tests) are not mistaken for a hang and
/// reset the device mid-operation.
///
/// The task runs on its own tokio task, independent of whether the worker
/// context is currently blocked in a handler. It never reads or writes
/// connection state or parameters.
pub struct LivenessCoordinator {
    task: JoinHandle<()>,
}

impl LivenessCoordinator {
    /// Spawns the timer task with the default period.
    ///
    /// The first extension happens immediately, then one per period.
    pub fn spawn<W: Watchdog>(watchdog: Arc<W>) -> Self {
        Self::spawn_with_period(watchdog, liveness::extend_period())
    }

    /// Spawns the timer task with a custom period.
    pub fn spawn_with_period<W: Watchdog>(watchdog: Arc<W>, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                watchdog.extend(liveness::EXTEND_MARGIN);
                debug!(
                    "liveness deadline extended by {} units",
                    liveness::EXTEND_MARGIN
                );
            }
        });
        Self { task }
    }

    /// Stops the timer task. No new ticks are started after this returns;
    /// a tick already executing its extension may still finish.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for LivenessCoordinator {
    fn drop(&mut self) {
        self.task.abort();
    }
}
