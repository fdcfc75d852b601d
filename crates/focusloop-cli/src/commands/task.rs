use clap::Subcommand;
use focusloop_core::storage::{Config, Database};
use focusloop_core::sync::RelayClient;
use focusloop_core::SessionEngine;

use super::{load_engine, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the local list
    Add {
        /// Task text
        text: String,
    },
    /// List local tasks as JSON
    List,
    /// Toggle a task's done flag by list position
    Done {
        /// Zero-based position in the list
        index: usize,
    },
    /// Remove a task by list position
    Remove {
        /// Zero-based position in the list
        index: usize,
    },
    /// Send one task to the relay for appending
    Share {
        /// Zero-based position in the list
        index: usize,
    },
    /// Replace the relay's mirror with the complete local list
    Push,
    /// Follow relay snapshots until Ctrl+C, mirroring them locally
    Watch,
}

fn task_id_at(engine: &SessionEngine, index: usize) -> Result<uuid::Uuid, Box<dyn std::error::Error>> {
    engine
        .tasks
        .get(index)
        .map(|t| t.id)
        .ok_or_else(|| format!("no task at position {index}").into())
}

fn print_tasks(engine: &SessionEngine) -> CliResult {
    println!("{}", serde_json::to_string_pretty(engine.tasks.tasks())?);
    Ok(())
}

pub fn run(action: TaskAction) -> CliResult {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config)?;

    match action {
        TaskAction::Add { text } => {
            engine.tasks.add(&text)?;
            engine.save(&db)?;
            print_tasks(&engine)?;
        }
        TaskAction::List => {
            print_tasks(&engine)?;
        }
        TaskAction::Done { index } => {
            let id = task_id_at(&engine, index)?;
            if let Some(event) = engine.toggle_task(id) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            engine.save(&db)?;
            print_tasks(&engine)?;
        }
        TaskAction::Remove { index } => {
            let id = task_id_at(&engine, index)?;
            engine.tasks.remove(id);
            engine.save(&db)?;
            print_tasks(&engine)?;
        }
        TaskAction::Share { index } => {
            let id = task_id_at(&engine, index)?;
            let task = engine
                .tasks
                .tasks()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or("task vanished")?;
            let runtime = tokio::runtime::Runtime::new()?;
            let snapshot = runtime.block_on(async {
                let mut client = RelayClient::connect(&config.relay.addr).await?;
                client.next_snapshot().await; // on-connect snapshot
                client.add_task(task).await?;
                Ok::<_, Box<dyn std::error::Error>>(client.next_snapshot().await)
            })?;
            if let Some(tasks) = snapshot {
                engine.tasks.replace(tasks);
                engine.save(&db)?;
            }
            print_tasks(&engine)?;
        }
        TaskAction::Push => {
            let local = engine.tasks.tasks().to_vec();
            let runtime = tokio::runtime::Runtime::new()?;
            let snapshot = runtime.block_on(async {
                let mut client = RelayClient::connect(&config.relay.addr).await?;
                client.next_snapshot().await;
                client.replace_tasks(local).await?;
                Ok::<_, Box<dyn std::error::Error>>(client.next_snapshot().await)
            })?;
            if let Some(tasks) = snapshot {
                engine.tasks.replace(tasks);
                engine.save(&db)?;
            }
            print_tasks(&engine)?;
        }
        TaskAction::Watch => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let mut client = RelayClient::connect(&config.relay.addr).await?;
                loop {
                    tokio::select! {
                        snapshot = client.next_snapshot() => {
                            match snapshot {
                                Some(tasks) => {
                                    engine.tasks.replace(tasks);
                                    if let Err(e) = engine.save(&db) {
                                        eprintln!("warning: snapshot failed: {e}");
                                    }
                                    println!(
                                        "{}",
                                        serde_json::to_string_pretty(engine.tasks.tasks())?
                                    );
                                }
                                // Relay gone: keep the last-known list.
                                None => break,
                            }
                        }
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
                Ok::<_, Box<dyn std::error::Error>>(())
            })?;
        }
    }
    Ok(())
}
