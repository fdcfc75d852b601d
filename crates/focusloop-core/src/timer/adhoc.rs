//! Independent ad-hoc countdown.
//!
//! No phase concept and no gamification side effects -- it only signals
//! completion so the caller can fire a notification or sound. Sized and
//! reset by the user at will, on its own tick source.

use serde::{Deserialize, Serialize};

use super::interval::IntervalTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdHocStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdHocTimer {
    target_minutes: u64,
    status: AdHocStatus,
    timer: IntervalTimer,
}

impl AdHocTimer {
    pub fn new(target_minutes: u64) -> Self {
        Self {
            target_minutes,
            status: AdHocStatus::Idle,
            timer: IntervalTimer::new(target_minutes.saturating_mul(60)),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> AdHocStatus {
        self.status
    }

    pub fn target_minutes(&self) -> u64 {
        self.target_minutes
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.timer.remaining_secs()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Resize the countdown. Stops it and clears any completion.
    pub fn set_target(&mut self, minutes: u64) {
        self.target_minutes = minutes;
        self.timer.reset(minutes.saturating_mul(60));
        self.status = AdHocStatus::Idle;
    }

    pub fn start(&mut self) {
        if matches!(self.status, AdHocStatus::Idle | AdHocStatus::Paused) {
            self.timer.start();
            if self.timer.is_running() {
                self.status = AdHocStatus::Running;
            }
        }
    }

    pub fn pause(&mut self) {
        if self.status == AdHocStatus::Running {
            self.timer.pause();
            self.status = AdHocStatus::Paused;
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset(self.target_minutes.saturating_mul(60));
        self.status = AdHocStatus::Idle;
    }

    /// Advance the countdown. Returns `true` once when it completes.
    pub fn tick(&mut self, delta_secs: u64) -> bool {
        if self.timer.tick(delta_secs) {
            self.status = AdHocStatus::Completed;
            return true;
        }
        false
    }
}

impl Default for AdHocTimer {
    fn default() -> Self {
        Self::new(10)
    }
}
