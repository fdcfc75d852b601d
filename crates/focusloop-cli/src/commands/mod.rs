pub mod auth;
pub mod calendar;
pub mod config;
pub mod countdown;
pub mod quote;
pub mod stats;
pub mod task;
pub mod timer;

use focusloop_core::notify::Notifier;
use focusloop_core::storage::{Config, Database};
use focusloop_core::SessionEngine;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the store and restore the persisted engine, falling back to a
/// fresh one built from the configured timer durations.
pub fn load_engine(db: &Database, config: &Config) -> Result<SessionEngine, Box<dyn std::error::Error>> {
    Ok(SessionEngine::load(db, config.timer_config())?)
}

pub fn notifier(config: &Config) -> Notifier {
    Notifier::new(config.notifications.enabled)
}
