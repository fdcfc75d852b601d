//! State-change events.
//!
//! Every state change in the session engine produces an [`Event`]; the CLI
//! prints them and UI layers render derived values from the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::{AdHocStatus, Phase};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionCompleted {
        minutes: u64,
        xp_awarded: u64,
        next_phase: Phase,
        at: DateTime<Utc>,
    },
    BreakCompleted {
        kind: Phase,
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
    AdHocCompleted {
        target_minutes: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    TaskRewarded {
        task_id: Uuid,
        xp_awarded: u64,
        at: DateTime<Utc>,
    },
    /// Full state snapshot for status displays.
    StateSnapshot {
        phase: Phase,
        seconds_remaining: u64,
        cycles_completed: u64,
        running: bool,
        adhoc_status: AdHocStatus,
        adhoc_seconds_remaining: u64,
        xp: u64,
        streak_days: u64,
        at: DateTime<Utc>,
    },
}
