//! Generic countdown timer.
//!
//! The timer holds no clock of its own -- the caller advances it with
//! `tick(delta_secs)` from whatever scheduler it runs under. This keeps the
//! state machine deterministic: tests drive it tick by tick without
//! wall-clock waits, and a pause/reset simply stops the caller from ticking,
//! so there is no pending callback to cancel.

use serde::{Deserialize, Serialize};

/// A countdown with start/pause/reset/expire semantics.
///
/// Reaching zero forces `running` false; the expiry is reported exactly
/// once, from the tick that consumed the final second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    total_secs: u64,
    remaining_secs: u64,
    running: bool,
}

impl IntervalTimer {
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin decrementing. No-op if already running or already expired.
    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.running = true;
        }
    }

    /// Halt decrementing, preserving remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Halt and set remaining time.
    pub fn reset(&mut self, to_secs: u64) {
        self.running = false;
        self.total_secs = to_secs;
        self.remaining_secs = to_secs;
    }

    /// Advance the countdown by `delta_secs`. Returns `true` exactly once
    /// per expiry, from the tick that reached zero.
    pub fn tick(&mut self, delta_secs: u64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(delta_secs);
        if self.remaining_secs == 0 {
            self.running = false;
            return true;
        }
        false
    }
}
