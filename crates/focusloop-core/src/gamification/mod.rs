//! Gamification engine.
//!
//! Pure, deterministic functions over completion events. Only the raw
//! counters are stored; rank and badges are recomputed from them on every
//! read so a derived value can never go stale.

pub mod badges;
pub mod ranks;

pub use badges::{Badge, BadgeCriterion, BadgeTable};
pub use ranks::{Rank, RankStanding, RankTable};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat XP for completing a task, granted at most once per task via the
/// `rewarded` latch.
pub const TASK_COMPLETION_XP: u64 = 10;

/// Stored gamification counters. Everything else derives from these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationState {
    pub xp: u64,
    pub pomodoro_count: u64,
    pub streak_days: u64,
    pub last_completion_date: Option<NaiveDate>,
}

impl GamificationState {
    /// Credit a finished focus session: `session_minutes` XP, one more
    /// completed pomodoro, and a streak update for `today`.
    pub fn record_focus_completion(&mut self, session_minutes: u64, today: NaiveDate) {
        self.xp += session_minutes;
        self.pomodoro_count += 1;
        self.streak_days = next_streak(self.streak_days, self.last_completion_date, today);
        self.last_completion_date = Some(today);
    }

    /// Credit a task completion. The caller gates this on the task's
    /// `rewarded` latch; un-completing never revokes XP.
    pub fn record_task_completion(&mut self) {
        self.xp += TASK_COMPLETION_XP;
    }
}

/// Streak continuity is defined over calendar days, not elapsed duration:
/// a completion on the day after the last one extends the streak even
/// across a daylight-saving transition, and any other gap (including
/// moving backward) resets it.
fn next_streak(current: u64, last: Option<NaiveDate>, today: NaiveDate) -> u64 {
    match last {
        Some(last) if last == today => current,
        Some(last) if today - last == chrono::Duration::days(1) => current + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn streak_sequence_same_next_and_gap_days() {
        let mut s = GamificationState::default();
        let expected = [(day(1), 1), (day(1), 1), (day(2), 2), (day(4), 1)];
        for (date, streak) in expected {
            s.record_focus_completion(25, date);
            assert_eq!(s.streak_days, streak, "after completion on {date}");
        }
    }

    #[test]
    fn streak_resets_when_moving_backward() {
        let mut s = GamificationState::default();
        s.record_focus_completion(25, day(10));
        s.record_focus_completion(25, day(11));
        assert_eq!(s.streak_days, 2);
        s.record_focus_completion(25, day(5));
        assert_eq!(s.streak_days, 1);
        assert_eq!(s.last_completion_date, Some(day(5)));
    }

    #[test]
    fn focus_completion_awards_session_minutes() {
        let mut s = GamificationState::default();
        s.record_focus_completion(25, day(1));
        s.record_focus_completion(50, day(1));
        assert_eq!(s.xp, 75);
        assert_eq!(s.pomodoro_count, 2);
    }

    #[test]
    fn task_completion_awards_flat_xp() {
        let mut s = GamificationState::default();
        s.record_task_completion();
        assert_eq!(s.xp, TASK_COMPLETION_XP);
    }

    #[test]
    fn streak_continues_across_month_boundary() {
        let mut s = GamificationState::default();
        s.record_focus_completion(25, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        s.record_focus_completion(25, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(s.streak_days, 2);
    }
}
