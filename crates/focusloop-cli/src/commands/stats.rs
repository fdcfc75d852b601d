use clap::Subcommand;
use focusloop_core::gamification::{BadgeTable, RankTable};
use focusloop_core::storage::{Config, Database};

use super::{load_engine, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Experience, rank, streak, and badges as JSON
    Show,
    /// Completed focus sessions per day
    History,
}

pub fn run(action: StatsAction) -> CliResult {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let engine = load_engine(&db, &config)?;

    match action {
        StatsAction::Show => {
            // Rank and badges derive from the counters on every read.
            let standing = RankTable::default().standing(engine.stats.xp);
            let badges = BadgeTable::default();
            let earned: Vec<_> = badges
                .earned(engine.stats.pomodoro_count, engine.stats.streak_days)
                .into_iter()
                .map(|b| b.name.clone())
                .collect();

            let report = serde_json::json!({
                "xp": engine.stats.xp,
                "pomodoro_count": engine.stats.pomodoro_count,
                "streak_days": engine.stats.streak_days,
                "last_completion_date": engine.stats.last_completion_date,
                "rank": standing,
                "badges": earned,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::History => {
            let per_day: Vec<_> = engine
                .history
                .days()
                .map(|(date, events)| {
                    serde_json::json!({
                        "date": date,
                        "completions": events.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&per_day)?);
        }
    }
    Ok(())
}
