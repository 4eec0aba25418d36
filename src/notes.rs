//! Per-day notes for one month.
//!
//! Text is stored exactly as entered. Adding a note rejects empty text;
//! editing may blank a note out, which is how the board shows a note that
//! has been cleared but not deleted.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::MonthGrid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("note text is empty")]
    Empty,
    #[error("day {day} is outside a {days}-day month")]
    DayOutOfRange { day: u8, days: u8 },
    #[error("no note {index} on day {day}")]
    NotFound { day: u8, index: usize },
}

/// Notes keyed by day of month, each day in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthNotes {
    days: u8,
    notes: BTreeMap<u8, Vec<String>>,
}

impl MonthNotes {
    /// Empty notes for a month with `days` days.
    #[must_use]
    pub fn new(days: u8) -> Self {
        Self { days, notes: BTreeMap::new() }
    }

    #[must_use]
    pub fn for_grid(grid: &MonthGrid) -> Self {
        Self::new(grid.days_in_month())
    }

    /// Append a note to `day`.
    ///
    /// # Errors
    ///
    /// `Empty` for empty text, `DayOutOfRange` for a day not in the month.
    pub fn add(&mut self, day: u8, text: &str) -> Result<usize, NoteError> {
        self.check_day(day)?;
        if text.is_empty() {
            return Err(NoteError::Empty);
        }
        let list = self.notes.entry(day).or_default();
        list.push(text.to_string());
        info!(day, count = list.len(), "note added");
        Ok(list.len() - 1)
    }

    /// Replace the text of note `index` on `day`. Empty text is allowed.
    ///
    /// # Errors
    ///
    /// `DayOutOfRange` or `NotFound`.
    pub fn edit(&mut self, day: u8, index: usize, text: &str) -> Result<(), NoteError> {
        self.check_day(day)?;
        let note = self
            .notes
            .get_mut(&day)
            .and_then(|list| list.get_mut(index))
            .ok_or(NoteError::NotFound { day, index })?;
        text.clone_into(note);
        debug!(day, index, "note edited");
        Ok(())
    }

    /// Delete note `index` on `day` and return its text.
    ///
    /// # Errors
    ///
    /// `DayOutOfRange` or `NotFound`.
    pub fn delete(&mut self, day: u8, index: usize) -> Result<String, NoteError> {
        self.check_day(day)?;
        let Some(list) = self.notes.get_mut(&day) else {
            return Err(NoteError::NotFound { day, index });
        };
        if index >= list.len() {
            return Err(NoteError::NotFound { day, index });
        }
        let removed = list.remove(index);
        if list.is_empty() {
            self.notes.remove(&day);
        }
        info!(day, index, "note deleted");
        Ok(removed)
    }

    /// Notes on `day`, oldest first; empty for days without notes.
    #[must_use]
    pub fn for_day(&self, day: u8) -> &[String] {
        self.notes.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Days that have at least one note, ascending.
    pub fn days_with_notes(&self) -> impl Iterator<Item = u8> + '_ {
        self.notes.keys().copied()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.notes.values().map(Vec::len).sum()
    }

    fn check_day(&self, day: u8) -> Result<(), NoteError> {
        if (1..=self.days).contains(&day) {
            Ok(())
        } else {
            Err(NoteError::DayOutOfRange { day, days: self.days })
        }
    }
}
