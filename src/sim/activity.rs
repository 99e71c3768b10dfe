//! Running/paused gate and the fixed-rate tick timer
//!
//! The timer turns wall-clock time into a whole number of ticks. While the
//! game is paused no ticks come out and the state stays frozen.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};

/// Whether ticks are being delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Running,
    #[default]
    Paused,
}

impl Activity {
    pub fn is_running(&self) -> bool {
        matches!(self, Activity::Running)
    }

    pub fn set_active(&mut self, active: bool) {
        *self = if active {
            Activity::Running
        } else {
            Activity::Paused
        };
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle(&mut self) -> Activity {
        self.set_active(!self.is_running());
        *self
    }
}

/// Accumulates elapsed time and releases fixed ticks while running
#[derive(Debug, Clone)]
pub struct TickTimer {
    activity: Activity,
    interval: Duration,
    accumulator: Duration,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    pub fn new() -> Self {
        Self {
            activity: Activity::Paused,
            interval: Duration::from_millis(TICK_INTERVAL_MS),
            accumulator: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_running(&self) -> bool {
        self.activity.is_running()
    }

    /// Start or stop tick delivery
    ///
    /// Stopping drops any partial interval so a restart waits a full one.
    pub fn set_active(&mut self, active: bool) {
        if active != self.is_running() {
            log::debug!("Tick timer {}", if active { "started" } else { "stopped" });
        }
        self.activity.set_active(active);
        if !active {
            self.accumulator = Duration::ZERO;
        }
    }

    pub fn toggle(&mut self) -> Activity {
        self.set_active(!self.is_running());
        self.activity
    }

    /// Feed elapsed time, get back the number of ticks to run now
    ///
    /// Capped at `MAX_SUBSTEPS`; time beyond the cap is dropped rather than
    /// carried into the next frame.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        if self.accumulator >= self.interval {
            let kept = self.interval - Duration::from_nanos(1);
            log::warn!(
                "Tick timer fell behind, dropping {:?}",
                self.accumulator - kept
            );
            self.accumulator = kept;
        }
        ticks
    }
}
