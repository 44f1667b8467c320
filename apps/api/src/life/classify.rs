//! Classifier: turns the week grid into display-ready week units.
//!
//! Everything here is a pure function of (birth date, lifespan, stage table,
//! current date). Nothing reads the clock; callers pass `current_date`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::life::grid::{weeks_between, WeekGrid, WeekStart, WEEKS_PER_YEAR};
use crate::life::stages::{resolve_bands, LifeStage, ResolvedBands};

/// Spacing of labelled years on the timeline axis.
const AXIS_MARKER_STEP: u32 = 5;

/// Real-valued age (in 52-week years) at `week`. Used for band lookup only.
pub fn age_in_years(week: NaiveDate, birth_date: NaiveDate) -> f64 {
    weeks_between(week, birth_date) as f64 / f64::from(WEEKS_PER_YEAR)
}

/// `true` iff `week_index` is before the current age in whole weeks.
pub fn is_past(week_index: u32, current_age_weeks: i64) -> bool {
    i64::from(week_index) < current_age_weeks
}

/// Birthday falling in `year`. 29 February maps to 1 March in non-leap years.
fn birthday_in_year(year: i32, birth_date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// First birthday strictly after `current_date`.
///
/// `None` only at the edge of the representable calendar.
pub fn next_birthday(current_date: NaiveDate, birth_date: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday_in_year(current_date.year(), birth_date)?;
    if this_year > current_date {
        Some(this_year)
    } else {
        birthday_in_year(current_date.year() + 1, birth_date)
    }
}

/// Display attributes of one week of life.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekUnit {
    pub index: u32,
    /// 1-based week of life.
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub age_in_years: f64,
    /// Calendar year of the week minus the birth year.
    pub calendar_age: i32,
    pub stage_color: String,
    pub is_past: bool,
    pub is_next_birthday_week: bool,
}

/// Inputs of one timeline computation.
#[derive(Debug, Clone)]
pub struct TimelineInput<'a> {
    pub birth_date: Option<NaiveDate>,
    pub expected_lifespan_years: u32,
    pub stages: &'a [LifeStage],
    pub current_date: NaiveDate,
    pub week_start: WeekStart,
}

/// Age split into whole years and leftover weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAge {
    pub total_weeks: i64,
    pub years: i64,
    pub weeks: i64,
}

impl CurrentAge {
    fn from_weeks(total_weeks: i64) -> Self {
        let per_year = i64::from(WEEKS_PER_YEAR);
        Self {
            total_weeks,
            years: total_weeks / per_year,
            weeks: total_weeks % per_year,
        }
    }
}

/// A fully resolved timeline. Week units are produced lazily by `units()`.
#[derive(Debug, Clone)]
pub struct LifeTimeline {
    birth_date: NaiveDate,
    expected_lifespan_years: u32,
    bands: ResolvedBands,
    grid: WeekGrid,
    current_age: CurrentAge,
    next_birthday: Option<NaiveDate>,
    next_birthday_week: Option<NaiveDate>,
}

impl LifeTimeline {
    /// Builds the timeline, or `None` when no birth date is set and the caller
    /// should ask for one.
    pub fn build(input: &TimelineInput<'_>) -> Option<Self> {
        let birth_date = input.birth_date?;
        let next_birthday = next_birthday(input.current_date, birth_date);
        Some(Self {
            birth_date,
            expected_lifespan_years: input.expected_lifespan_years,
            bands: resolve_bands(input.stages, input.expected_lifespan_years),
            grid: WeekGrid::new(birth_date, input.expected_lifespan_years, input.week_start),
            current_age: CurrentAge::from_weeks(weeks_between(input.current_date, birth_date)),
            next_birthday,
            next_birthday_week: next_birthday.map(|d| input.week_start.week_of(d)),
        })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn bands(&self) -> &ResolvedBands {
        &self.bands
    }

    pub fn total_weeks(&self) -> u32 {
        self.grid.total_weeks()
    }

    /// Whether every one of `total_weeks()` weeks has a calendar date.
    pub fn fits_calendar(&self) -> bool {
        self.grid.fits_calendar()
    }

    pub fn current_age(&self) -> CurrentAge {
        self.current_age
    }

    pub fn next_birthday(&self) -> Option<NaiveDate> {
        self.next_birthday
    }

    pub fn next_birthday_week(&self) -> Option<NaiveDate> {
        self.next_birthday_week
    }

    /// Years labelled on the axis: every fifth year plus the lifespan itself.
    pub fn axis_markers(&self) -> Vec<u32> {
        let mut markers: Vec<u32> = (0..=self.expected_lifespan_years)
            .step_by(AXIS_MARKER_STEP as usize)
            .collect();
        if markers.last() != Some(&self.expected_lifespan_years) {
            markers.push(self.expected_lifespan_years);
        }
        markers
    }

    pub fn classify(&self, index: u32, start_date: NaiveDate) -> WeekUnit {
        let age = age_in_years(start_date, self.birth_date);
        WeekUnit {
            index,
            week_number: index + 1,
            start_date,
            age_in_years: age,
            calendar_age: start_date.year() - self.birth_date.year(),
            stage_color: self.bands.color_for_age(age).to_string(),
            is_past: is_past(index, self.current_age.total_weeks),
            is_next_birthday_week: self.next_birthday_week == Some(start_date),
        }
    }

    /// Restartable, in-order sequence of classified weeks.
    pub fn units(&self) -> impl Iterator<Item = WeekUnit> + '_ {
        self.grid
            .clone()
            .zip(0u32..)
            .map(move |(week, index)| self.classify(index, week))
    }
}
