//! Focus cycle controller.
//!
//! State machine over the three phases of the cycling timer:
//!
//! ```text
//! Session ──expiry──> ShortBreak ──expiry──> Session (cycles += 1)
//!    │                                          │
//!    └──expiry (cycles % 4 == 0, != 0)──> LongBreak ──expiry──┘
//! ```
//!
//! The long-break decision reads `cycles_completed` *before* it is
//! incremented: the counter moves only when a break expires, so the break
//! chosen after the session that follows the 4th completed cycle is long,
//! and the one after that is short again.

use serde::{Deserialize, Serialize};

use super::interval::IntervalTimer;
use crate::error::ValidationError;

/// Completed Session+Break pairs between long breaks.
pub const CYCLES_BEFORE_LONG_BREAK: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Session,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Session => "session",
            Phase::ShortBreak => "short break",
            Phase::LongBreak => "long break",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }
}

/// Configured phase lengths, editable only while the timer is not running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub session_minutes: u64,
    pub break_minutes: u64,
    pub long_break_minutes: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            session_minutes: 25,
            break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

impl TimerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("session_minutes", self.session_minutes),
            ("break_minutes", self.break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field,
                    message: "must be a positive number of minutes".into(),
                });
            }
        }
        Ok(())
    }

    /// Configured length of `phase` in seconds.
    pub fn phase_secs(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Session => self.session_minutes,
            Phase::ShortBreak => self.break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        minutes.saturating_mul(60)
    }
}

/// What a tick produced beyond moving the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A focus session finished; the controller moved to `next`.
    SessionCompleted { minutes: u64, next: Phase },
    /// A break finished; back to a focus session.
    BreakCompleted { kind: Phase },
}

/// The cycling session/break timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleController {
    config: TimerConfig,
    phase: Phase,
    cycles_completed: u64,
    timer: IntervalTimer,
}

impl CycleController {
    pub fn new(config: TimerConfig) -> Self {
        let timer = IntervalTimer::new(config.phase_secs(Phase::Session));
        Self {
            config,
            phase: Phase::Session,
            cycles_completed: 0,
            timer,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// Manual reset: back to Session with zero completed cycles, regardless
    /// of the prior phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Session;
        self.cycles_completed = 0;
        self.timer.reset(self.config.phase_secs(Phase::Session));
    }

    /// Apply a new config. Ignored while running; otherwise the current
    /// phase's remaining time is reset to its new configured length.
    /// Returns whether the change was applied.
    pub fn set_config(&mut self, config: TimerConfig) -> bool {
        if self.timer.is_running() {
            return false;
        }
        self.config = config;
        self.timer.reset(self.config.phase_secs(self.phase));
        true
    }

    /// Advance the timer. On phase expiry the controller moves to the next
    /// phase, keeps running, and reports what completed.
    pub fn tick(&mut self, delta_secs: u64) -> Option<CycleOutcome> {
        if !self.timer.tick(delta_secs) {
            return None;
        }
        match self.phase {
            Phase::Session => {
                let next = if self.cycles_completed != 0
                    && self.cycles_completed % CYCLES_BEFORE_LONG_BREAK == 0
                {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                };
                let minutes = self.config.session_minutes;
                self.phase = next;
                self.timer.reset(self.config.phase_secs(next));
                self.timer.start();
                Some(CycleOutcome::SessionCompleted { minutes, next })
            }
            kind => {
                self.cycles_completed += 1;
                self.phase = Phase::Session;
                self.timer.reset(self.config.phase_secs(Phase::Session));
                self.timer.start();
                Some(CycleOutcome::BreakCompleted { kind })
            }
        }
    }
}

impl Default for CycleController {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn short_config() -> TimerConfig {
        TimerConfig {
            session_minutes: 1,
            break_minutes: 1,
            long_break_minutes: 2,
        }
    }

    /// Run the controller until the next outcome, asserting remaining time
    /// stays within the configured phase length.
    fn run_to_outcome(c: &mut CycleController) -> CycleOutcome {
        let limit = c.config().phase_secs(c.phase());
        loop {
            assert!(c.seconds_remaining() <= limit);
            if let Some(outcome) = c.tick(1) {
                return outcome;
            }
        }
    }

    #[test]
    fn session_expiry_moves_to_short_break_first() {
        let mut c = CycleController::new(short_config());
        c.start();
        let outcome = run_to_outcome(&mut c);
        assert_eq!(
            outcome,
            CycleOutcome::SessionCompleted {
                minutes: 1,
                next: Phase::ShortBreak
            }
        );
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.seconds_remaining(), 60);
        assert!(c.is_running());
    }

    #[test]
    fn break_expiry_returns_to_session_and_counts_cycle() {
        let mut c = CycleController::new(short_config());
        c.start();
        run_to_outcome(&mut c); // session -> short break
        let outcome = run_to_outcome(&mut c);
        assert_eq!(
            outcome,
            CycleOutcome::BreakCompleted {
                kind: Phase::ShortBreak
            }
        );
        assert_eq!(c.phase(), Phase::Session);
        assert_eq!(c.cycles_completed(), 1);
    }

    #[test]
    fn long_break_after_fourth_cycle_then_short_again() {
        let mut c = CycleController::new(short_config());
        c.start();
        // Complete four full Session+Break cycles.
        for _ in 0..4 {
            match run_to_outcome(&mut c) {
                CycleOutcome::SessionCompleted { next, .. } => {
                    assert_eq!(next, Phase::ShortBreak)
                }
                other => panic!("expected session completion, got {other:?}"),
            }
            run_to_outcome(&mut c);
        }
        assert_eq!(c.cycles_completed(), 4);
        // The break after the next session is long...
        match run_to_outcome(&mut c) {
            CycleOutcome::SessionCompleted { next, .. } => assert_eq!(next, Phase::LongBreak),
            other => panic!("expected session completion, got {other:?}"),
        }
        assert_eq!(c.seconds_remaining(), 120);
        run_to_outcome(&mut c); // long break -> session, cycles 4 -> 5
        assert_eq!(c.cycles_completed(), 5);
        // ...and the one after that is short again.
        match run_to_outcome(&mut c) {
            CycleOutcome::SessionCompleted { next, .. } => assert_eq!(next, Phase::ShortBreak),
            other => panic!("expected session completion, got {other:?}"),
        }
    }

    #[test]
    fn config_change_ignored_while_running() {
        let mut c = CycleController::new(short_config());
        c.start();
        c.tick(10);
        let mut cfg = short_config();
        cfg.session_minutes = 50;
        assert!(!c.set_config(cfg));
        assert_eq!(c.config().session_minutes, 1);
        assert_eq!(c.seconds_remaining(), 50);
    }

    #[test]
    fn config_change_while_stopped_resets_current_phase() {
        let mut c = CycleController::new(short_config());
        c.start();
        c.tick(10);
        c.pause();
        let mut cfg = short_config();
        cfg.session_minutes = 2;
        assert!(c.set_config(cfg));
        assert_eq!(c.seconds_remaining(), 120);
        assert!(!c.is_running());
    }

    #[test]
    fn manual_reset_returns_to_fresh_session() {
        let mut c = CycleController::new(short_config());
        c.start();
        run_to_outcome(&mut c);
        run_to_outcome(&mut c);
        assert_eq!(c.cycles_completed(), 1);
        c.reset();
        assert_eq!(c.phase(), Phase::Session);
        assert_eq!(c.cycles_completed(), 0);
        assert_eq!(c.seconds_remaining(), 60);
        assert!(!c.is_running());
    }

    #[test]
    fn zero_minutes_rejected() {
        let cfg = TimerConfig {
            session_minutes: 0,
            ..TimerConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(TimerConfig::default().validate().is_ok());
    }

    proptest! {
        /// For any positive session length, exactly session_minutes*60 ticks
        /// move Session to a break, and remaining time never exceeds the
        /// phase length.
        #[test]
        fn session_length_ticks_reach_break(minutes in 1u64..=60) {
            let cfg = TimerConfig {
                session_minutes: minutes,
                break_minutes: 5,
                long_break_minutes: 15,
            };
            let mut c = CycleController::new(cfg);
            c.start();
            for _ in 0..minutes * 60 - 1 {
                prop_assert!(c.tick(1).is_none());
                prop_assert_eq!(c.phase(), Phase::Session);
            }
            let outcome = c.tick(1);
            prop_assert_eq!(
                outcome,
                Some(CycleOutcome::SessionCompleted {
                    minutes,
                    next: Phase::ShortBreak
                })
            );
            prop_assert!(c.phase().is_break());
        }
    }
}
