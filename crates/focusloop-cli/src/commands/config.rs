use clap::Subcommand;
use focusloop_core::storage::{Config, Database};

use super::{load_engine, CliResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as JSON
    Show,
    /// Update configuration values
    Set {
        /// Focus session length in minutes
        #[arg(long)]
        session: Option<u64>,
        /// Short break length in minutes
        #[arg(long = "break")]
        break_minutes: Option<u64>,
        /// Long break length in minutes
        #[arg(long)]
        long_break: Option<u64>,
        /// Enable or disable desktop notifications
        #[arg(long)]
        notifications: Option<bool>,
        /// Relay address, host:port
        #[arg(long)]
        relay: Option<String>,
    },
}

pub fn run(action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            session,
            break_minutes,
            long_break,
            notifications,
            relay,
        } => {
            let mut config = Config::load()?;
            if let Some(v) = session {
                config.timer.session_minutes = v;
            }
            if let Some(v) = break_minutes {
                config.timer.break_minutes = v;
            }
            if let Some(v) = long_break {
                config.timer.long_break_minutes = v;
            }
            if let Some(v) = notifications {
                config.notifications.enabled = v;
            }
            if let Some(v) = relay {
                config.relay.addr = v;
            }
            config.timer_config().validate()?;
            config.save()?;

            // Duration changes reach the engine only while it is stopped.
            let db = Database::open()?;
            let mut engine = load_engine(&db, &config)?;
            if engine.cycle.set_config(config.timer_config()) {
                engine.save(&db)?;
            } else {
                eprintln!("timer is running; duration change ignored until it stops");
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
