//! Week grid: the lazily generated sequence of week-start dates of a life.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Nominal weeks per year. Drift against the calendar is not corrected.
pub const WEEKS_PER_YEAR: u32 = 52;

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Start of the calendar week containing `date`.
    pub fn week_of(self, date: NaiveDate) -> NaiveDate {
        let offset = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        // Only fails at the first representable week, where the date is its own anchor.
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(date)
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(format!("unknown week start '{other}' (expected sunday or monday)")),
        }
    }
}

/// Whole weeks from `from` to `to`, truncated toward zero.
pub fn weeks_between(to: NaiveDate, from: NaiveDate) -> i64 {
    (to - from).num_days() / 7
}

/// Finite, restartable sequence of `lifespan * 52` week starts, 7 days apart,
/// beginning at the week containing the birth date.
#[derive(Debug, Clone)]
pub struct WeekGrid {
    first: NaiveDate,
    next: u32,
    total: u32,
}

impl WeekGrid {
    pub fn new(birth_date: NaiveDate, expected_lifespan_years: u32, week_start: WeekStart) -> Self {
        Self {
            first: week_start.week_of(birth_date),
            next: 0,
            total: expected_lifespan_years.saturating_mul(WEEKS_PER_YEAR),
        }
    }

    pub fn total_weeks(&self) -> u32 {
        self.total
    }

    /// `false` when the last week would fall past the end of the calendar.
    /// Iteration stops early on such a grid, so callers reject it up front.
    pub fn fits_calendar(&self) -> bool {
        self.total == 0 || self.week_at(self.total - 1).is_some()
    }

    /// Week start at `index`, or `None` past the end of the grid (or the calendar).
    pub fn week_at(&self, index: u32) -> Option<NaiveDate> {
        if index >= self.total {
            return None;
        }
        self.first
            .checked_add_days(Days::new(u64::from(index) * 7))
    }
}

impl Iterator for WeekGrid {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let week = self.week_at(self.next)?;
        self.next += 1;
        Some(week)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WeekGrid {}
