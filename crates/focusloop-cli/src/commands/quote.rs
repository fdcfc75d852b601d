use rand::seq::SliceRandom;

use super::CliResult;

const QUOTES: &[&str] = &[
    "Focus on the step in front of you, not the whole staircase.",
    "Small sessions, repeated daily, outweigh heroic all-nighters.",
    "A break is part of the work, not a pause from it.",
    "Done is a direction, not a destination.",
    "The streak you keep today is the habit you own tomorrow.",
    "Start the timer. Everything else is negotiation.",
    "Attention is a budget; spend it on purpose.",
    "Momentum is built one completed task at a time.",
];

pub fn run() -> CliResult {
    let mut rng = rand::thread_rng();
    if let Some(quote) = QUOTES.choose(&mut rng) {
        println!("{quote}");
    }
    Ok(())
}
