//! Calendar task store.
//!
//! Date-keyed lists of freeform notes, fully independent of the main task
//! list and the relay. Notes can only be appended.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarTaskMap {
    notes: BTreeMap<NaiveDate, Vec<String>>,
}

impl CalendarTaskMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note under `date`. Whitespace-only input is rejected
    /// without mutating the map.
    pub fn add_note(&mut self, date: NaiveDate, text: &str) -> Result<(), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyNote);
        }
        self.notes.entry(date).or_default().push(text.to_string());
        Ok(())
    }

    pub fn notes(&self, date: NaiveDate) -> &[String] {
        self.notes.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.notes.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn whitespace_only_note_is_rejected() {
        let mut map = CalendarTaskMap::new();
        assert_eq!(map.add_note(date(), "   \t").unwrap_err(), ValidationError::EmptyNote);
        assert!(map.is_empty());
    }

    #[test]
    fn notes_append_in_order() {
        let mut map = CalendarTaskMap::new();
        map.add_note(date(), "review PRs").unwrap();
        map.add_note(date(), "  plan sprint ").unwrap();
        assert_eq!(map.notes(date()), ["review PRs", "plan sprint"]);
    }

    #[test]
    fn unknown_date_is_empty() {
        let map = CalendarTaskMap::new();
        assert!(map.notes(date()).is_empty());
    }
}
