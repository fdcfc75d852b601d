use clap::Subcommand;
use focusloop_core::storage::{Config, Database};

use super::{load_engine, notifier, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the cycling timer in the foreground until Ctrl+C
    Run,
    /// Print the current engine state as JSON
    Status,
    /// Halt the timer, preserving remaining time
    Pause,
    /// Back to a fresh session with zero completed cycles
    Reset,
}

pub fn run(action: TimerAction) -> CliResult {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config)?;

    match action {
        TimerAction::Run => {
            let notifier = notifier(&config);
            engine.cycle.start();
            engine.save(&db)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
                ticker.tick().await; // first tick completes immediately
                loop {
                    tokio::select! {
                        _ = ticker.tick() => {
                            let events = engine.tick(1, &notifier);
                            for event in &events {
                                if let Ok(json) = serde_json::to_string_pretty(event) {
                                    println!("{json}");
                                }
                            }
                            if !events.is_empty() {
                                // Snapshot after every state change; a failed
                                // write must not stop the timer.
                                if let Err(e) = engine.save(&db) {
                                    eprintln!("warning: snapshot failed: {e}");
                                }
                            }
                        }
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
            });

            engine.cycle.pause();
            engine.save(&db)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Pause => {
            engine.cycle.pause();
            engine.save(&db)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Reset => {
            engine.cycle.reset();
            engine.save(&db)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }
    Ok(())
}
