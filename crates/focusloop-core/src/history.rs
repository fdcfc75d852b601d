//! History ledger.
//!
//! Append-only per-day log of completed focus sessions. Breaks are never
//! recorded. The ledger is snapshotted to the key-value store on every
//! mutation and loaded once at startup, so it survives process restarts.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Work,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub kind: CompletionKind,
    pub timestamp: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn work(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: CompletionKind::Work,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    days: BTreeMap<NaiveDate, Vec<CompletionEvent>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event under its calendar day.
    pub fn record(&mut self, event: CompletionEvent) {
        self.days
            .entry(event.timestamp.date_naive())
            .or_default()
            .push(event);
    }

    pub fn for_day(&self, date: NaiveDate) -> &[CompletionEvent] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_completions(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Days with at least one completion, oldest first.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[CompletionEvent])> {
        self.days.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn records_group_by_calendar_day() {
        let mut ledger = HistoryLedger::new();
        ledger.record(CompletionEvent::work(at(1, 9)));
        ledger.record(CompletionEvent::work(at(1, 14)));
        ledger.record(CompletionEvent::work(at(2, 9)));
        assert_eq!(ledger.for_day(at(1, 0).date_naive()).len(), 2);
        assert_eq!(ledger.for_day(at(2, 0).date_naive()).len(), 1);
        assert_eq!(ledger.total_completions(), 3);
    }

    #[test]
    fn unknown_day_is_empty() {
        let ledger = HistoryLedger::new();
        assert!(ledger.for_day(at(1, 0).date_naive()).is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn survives_a_json_round_trip() {
        let mut ledger = HistoryLedger::new();
        ledger.record(CompletionEvent::work(at(3, 8)));
        let json = serde_json::to_string(&ledger).unwrap();
        let restored: HistoryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);
    }
}
