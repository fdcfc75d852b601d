use chrono::NaiveDate;
use clap::Subcommand;
use focusloop_core::storage::Database;

use super::CliResult;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Append a note under a date
    Add {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Note text
        text: String,
    },
    /// Print notes for one date, or the whole calendar
    List {
        /// Date as YYYY-MM-DD
        date: Option<NaiveDate>,
    },
}

pub fn run(action: CalendarAction) -> CliResult {
    let db = Database::open()?;
    let mut calendar = db.load_calendar()?;

    match action {
        CalendarAction::Add { date, text } => {
            calendar.add_note(date, &text)?;
            db.save_calendar(&calendar)?;
            println!("{}", serde_json::to_string_pretty(calendar.notes(date))?);
        }
        CalendarAction::List { date } => match date {
            Some(date) => {
                println!("{}", serde_json::to_string_pretty(calendar.notes(date))?);
            }
            None => {
                let all: Vec<_> = calendar
                    .dates()
                    .map(|d| {
                        serde_json::json!({
                            "date": d,
                            "notes": calendar.notes(d),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&all)?);
            }
        },
    }
    Ok(())
}
