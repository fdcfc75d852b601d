use clap::Subcommand;
use focusloop_core::storage::{Config, Database};
use focusloop_core::timer::AdHocStatus;

use super::{load_engine, notifier, CliResult};

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Run an ad-hoc countdown in the foreground until it completes
    Run {
        /// Countdown length
        #[arg(long)]
        minutes: u64,
    },
    /// Print the countdown state as JSON
    Status,
    /// Stop and rewind to the configured target
    Reset,
}

pub fn run(action: CountdownAction) -> CliResult {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config)?;

    match action {
        CountdownAction::Run { minutes } => {
            let notifier = notifier(&config);
            engine.adhoc.set_target(minutes);
            engine.adhoc.start();
            engine.save(&db)?;

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
                ticker.tick().await;
                loop {
                    tokio::select! {
                        _ = ticker.tick() => {
                            for event in engine.tick(1, &notifier) {
                                if let Ok(json) = serde_json::to_string_pretty(&event) {
                                    println!("{json}");
                                }
                            }
                            if engine.adhoc.status() == AdHocStatus::Completed {
                                break;
                            }
                        }
                        _ = tokio::signal::ctrl_c() => {
                            engine.adhoc.pause();
                            break;
                        }
                    }
                }
            });

            engine.save(&db)?;
        }
        CountdownAction::Status => {
            let state = serde_json::json!({
                "status": engine.adhoc.status(),
                "target_minutes": engine.adhoc.target_minutes(),
                "seconds_remaining": engine.adhoc.seconds_remaining(),
            });
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        CountdownAction::Reset => {
            engine.adhoc.reset();
            engine.save(&db)?;
        }
    }
    Ok(())
}
