//! Badge predicate table.
//!
//! Membership is recomputed from the current counters on every read, never
//! stored. Counters are monotonically non-decreasing in normal operation,
//! so an earned badge stays earned.

use serde::{Deserialize, Serialize};

/// Threshold predicate for unlocking a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCriterion {
    /// At least this many completed focus sessions.
    Completions(u64),
    /// A streak of at least this many consecutive days.
    StreakDays(u64),
}

impl BadgeCriterion {
    pub fn met(&self, pomodoro_count: u64, streak_days: u64) -> bool {
        match *self {
            BadgeCriterion::Completions(n) => pomodoro_count >= n,
            BadgeCriterion::StreakDays(n) => streak_days >= n,
        }
    }
}

/// A named achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub criterion: BadgeCriterion,
}

impl Badge {
    pub fn new(name: impl Into<String>, criterion: BadgeCriterion) -> Self {
        Self {
            name: name.into(),
            criterion,
        }
    }
}

/// Fixed badge table. Configuration data like the rank table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeTable {
    badges: Vec<Badge>,
}

impl BadgeTable {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self { badges }
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Badges whose criteria the current counters satisfy.
    pub fn earned(&self, pomodoro_count: u64, streak_days: u64) -> Vec<&Badge> {
        self.badges
            .iter()
            .filter(|b| b.criterion.met(pomodoro_count, streak_days))
            .collect()
    }
}

impl Default for BadgeTable {
    fn default() -> Self {
        Self::new(vec![
            Badge::new("First Focus", BadgeCriterion::Completions(1)),
            Badge::new("On a Roll", BadgeCriterion::Completions(10)),
            Badge::new("Half Century", BadgeCriterion::Completions(50)),
            Badge::new("Centurion", BadgeCriterion::Completions(100)),
            Badge::new("Three-Day Streak", BadgeCriterion::StreakDays(3)),
            Badge::new("Week of Focus", BadgeCriterion::StreakDays(7)),
            Badge::new("Monthly Habit", BadgeCriterion::StreakDays(30)),
        ])
    }
}
