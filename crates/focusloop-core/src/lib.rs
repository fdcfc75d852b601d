//! # FocusLoop Core Library
//!
//! Core business logic for the FocusLoop productivity tracker. All
//! operations are available through a standalone CLI binary; the relay
//! server is a thin wrapper over [`sync::Relay`].
//!
//! ## Architecture
//!
//! - **Timer**: tick-driven state machines. The caller owns the clock and
//!   advances timers with `tick(delta_secs)`, so timer logic runs the same
//!   under a real scheduler and under tests.
//! - **Gamification**: pure functions over completion events. Rank and
//!   badges are recomputed from stored counters on every read, never cached.
//! - **Storage**: SQLite key-value snapshots plus TOML configuration.
//! - **Sync**: newline-delimited JSON between viewers and a relay that
//!   rebroadcasts the full task list on every change.
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: glue driving timers into the ledger and scores
//! - [`timer::CycleController`]: session/break/long-break state machine
//! - [`gamification::GamificationState`]: xp, streak, completion counters
//! - [`sync::Relay`]: authoritative task mirror

pub mod accounts;
pub mod calendar;
pub mod engine;
pub mod error;
pub mod events;
pub mod gamification;
pub mod history;
pub mod notify;
pub mod storage;
pub mod sync;
pub mod task;
pub mod timer;

pub use engine::SessionEngine;
pub use error::{ConfigError, CoreError, StorageError, SyncError, ValidationError};
pub use events::Event;
pub use gamification::{BadgeTable, GamificationState, RankStanding, RankTable};
pub use history::{CompletionEvent, CompletionKind, HistoryLedger};
pub use storage::{Config, Database};
pub use task::{Task, TaskList};
pub use timer::{AdHocStatus, AdHocTimer, CycleController, IntervalTimer, Phase, TimerConfig};
