//! Month grid drawn under the decorations.
//!
//! Weeks start on Sunday. Leading cells before the first of the month are
//! blank, and the grid is padded with trailing blanks to whole weeks.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use serde::Serialize;
use time::{Date, Month, OffsetDateTime};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid month: {0}")]
    InvalidMonth(u8),
    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
}

/// One calendar cell: a day of the month, or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DayCell {
    Blank,
    Day(u8),
}

impl DayCell {
    #[must_use]
    pub fn day(self) -> Option<u8> {
        match self {
            Self::Blank => None,
            Self::Day(d) => Some(d),
        }
    }
}

/// Layout of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    first_weekday: u8,
    days_in_month: u8,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Grid for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` outside 1-12 and `InvalidDate` for a year the
    /// `time` crate cannot represent.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        let month = Month::try_from(month).map_err(|_| CalendarError::InvalidMonth(month))?;
        let first = Date::from_calendar_date(year, month, 1)?;
        let first_weekday = first.weekday().number_days_from_sunday();
        let days_in_month = (28..=31)
            .rev()
            .find(|&d| Date::from_calendar_date(year, month, d).is_ok())
            .unwrap_or(28);

        let mut cells: Vec<DayCell> = std::iter::repeat_n(DayCell::Blank, usize::from(first_weekday))
            .chain((1..=days_in_month).map(DayCell::Day))
            .collect();
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat_n(DayCell::Blank, trailing));

        Ok(Self { year, month, first_weekday, days_in_month, cells })
    }

    /// Grid for the current month in UTC.
    ///
    /// # Errors
    ///
    /// Same as [`MonthGrid::new`]; not expected for real clocks.
    pub fn current() -> Result<Self, CalendarError> {
        let today = OffsetDateTime::now_utc().date();
        Self::new(today.year(), u8::from(today.month()))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    #[must_use]
    pub fn month(&self) -> u8 {
        u8::from(self.month)
    }

    /// English month name, e.g. "February".
    #[must_use]
    pub fn month_name(&self) -> String {
        self.month.to_string()
    }

    /// Column of the first day, 0 = Sunday.
    #[must_use]
    pub fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// All cells row-major; length is a multiple of seven.
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    #[must_use]
    pub fn contains_day(&self, day: u8) -> bool {
        (1..=self.days_in_month).contains(&day)
    }
}
