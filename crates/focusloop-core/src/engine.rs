//! Session engine.
//!
//! Glue between the timers and everything they drive: on session expiry a
//! completion event lands in the history ledger, the gamification counters
//! move, and a notification fires; on break or ad-hoc expiry only the
//! notification fires. Task completions route through the rewarded latch.
//!
//! The engine is serializable: the CLI persists it in the key-value store
//! between invocations and only advances it while a `run` loop is in the
//! foreground.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::events::Event;
use crate::gamification::{GamificationState, TASK_COMPLETION_XP};
use crate::history::{CompletionEvent, HistoryLedger};
use crate::notify::Notifier;
use crate::storage::Database;
use crate::task::TaskList;
use crate::timer::{AdHocTimer, CycleController, CycleOutcome, TimerConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    pub cycle: CycleController,
    pub adhoc: AdHocTimer,
    pub stats: GamificationState,
    pub history: HistoryLedger,
    pub tasks: TaskList,
}

impl SessionEngine {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            cycle: CycleController::new(config),
            adhoc: AdHocTimer::default(),
            stats: GamificationState::default(),
            history: HistoryLedger::new(),
            tasks: TaskList::new(),
        }
    }

    /// Restore the engine from the snapshot store, or start fresh.
    pub fn load(db: &Database, config: TimerConfig) -> Result<Self> {
        match db.load_engine()? {
            Some(engine) => Ok(engine),
            None => Ok(Self::new(config)),
        }
    }

    /// Snapshot every mutable piece to the store.
    pub fn save(&self, db: &Database) -> Result<()> {
        db.save_engine(self)?;
        db.save_history(&self.history)?;
        db.save_gamification(&self.stats)?;
        db.save_tasks(self.tasks.tasks())?;
        Ok(())
    }

    /// Advance both timers by `delta_secs` at wall-clock `now`.
    ///
    /// The two timers never share state; a tick that expires both produces
    /// both events. Notification failures degrade silently inside the
    /// notifier.
    pub fn tick_at(
        &mut self,
        delta_secs: u64,
        now: DateTime<Utc>,
        notifier: &Notifier,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(outcome) = self.cycle.tick(delta_secs) {
            match outcome {
                CycleOutcome::SessionCompleted { minutes, next } => {
                    self.history.record(CompletionEvent::work(now));
                    self.stats.record_focus_completion(minutes, now.date_naive());
                    notifier.send(
                        "Focus session complete",
                        &format!("Time for a {}", next.label()),
                    );
                    events.push(Event::SessionCompleted {
                        minutes,
                        xp_awarded: minutes,
                        next_phase: next,
                        at: now,
                    });
                }
                CycleOutcome::BreakCompleted { kind } => {
                    notifier.send("Break over", "Back to focus");
                    events.push(Event::BreakCompleted {
                        kind,
                        cycles_completed: self.cycle.cycles_completed(),
                        at: now,
                    });
                }
            }
        }

        if self.adhoc.tick(delta_secs) {
            notifier.send("Countdown finished", "Your ad-hoc timer is done");
            events.push(Event::AdHocCompleted {
                target_minutes: self.adhoc.target_minutes(),
                at: now,
            });
        }

        events
    }

    pub fn tick(&mut self, delta_secs: u64, notifier: &Notifier) -> Vec<Event> {
        self.tick_at(delta_secs, Utc::now(), notifier)
    }

    /// Toggle a task's done flag, awarding the flat task XP exactly once
    /// per task. Returns the reward event when XP was granted.
    pub fn toggle_task(&mut self, id: Uuid) -> Option<Event> {
        let outcome = self.tasks.toggle(id)?;
        if outcome.newly_rewarded {
            self.stats.record_task_completion();
            return Some(Event::TaskRewarded {
                task_id: id,
                xp_awarded: TASK_COMPLETION_XP,
                at: Utc::now(),
            });
        }
        None
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.cycle.phase(),
            seconds_remaining: self.cycle.seconds_remaining(),
            cycles_completed: self.cycle.cycles_completed(),
            running: self.cycle.is_running(),
            adhoc_status: self.adhoc.status(),
            adhoc_seconds_remaining: self.adhoc.seconds_remaining(),
            xp: self.stats.xp,
            streak_days: self.stats.streak_days,
            at: Utc::now(),
        }
    }
}
