//! Per-year holiday tables and date queries.
//!
//! A year table is built by layering three rule sets in a fixed order: the
//! fixed-date holidays, the Ley Emiliani holidays moved to Monday, then the
//! Easter-relative holidays. Every layer is keyed by (month, day); when two
//! layers produce the same key, the layer applied later replaces the earlier
//! entry.
//!
//! Tables are rebuilt on every call. Nothing is cached between queries.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::easter::{easter_sunday, ensure_supported};
use crate::error::{HolidayError, Result};
use crate::rules::{EASTER_RELATIVE, FIXED_HOLIDAYS, MOVABLE_TO_MONDAY, SUNDAY};
use crate::shift::next_monday;

/// A (month, day) key, ordered by month then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// The (month, day) on which `date` falls.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    /// Materialize this key as a date in `year`.
    ///
    /// # Errors
    /// Returns `HolidayError::InvalidDate` if the pair does not exist in `year`
    /// (e.g. February 29 in a common year).
    pub fn in_year(self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(HolidayError::InvalidDate {
            year,
            month: self.month,
            day: self.day,
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Which rule produced a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Observed on its calendar date.
    Fixed,
    /// Moved to the following Monday under the Ley Emiliani.
    Emiliani,
    /// Computed from Easter Sunday.
    EasterRelative,
}

/// A resolved holiday on a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
    pub kind: HolidayKind,
}

impl Holiday {
    /// The (month, day) this holiday is keyed by.
    pub fn key(&self) -> MonthDay {
        MonthDay::of(self.date)
    }
}

/// The resolved holidays of one year, keyed by (month, day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHolidays {
    year: i32,
    entries: BTreeMap<MonthDay, Holiday>,
}

impl YearHolidays {
    fn new(year: i32) -> Self {
        Self {
            year,
            entries: BTreeMap::new(),
        }
    }

    fn insert(&mut self, date: NaiveDate, name: &'static str, kind: HolidayKind) {
        self.entries
            .insert(MonthDay::of(date), Holiday { date, name, kind });
    }

    /// Apply `layer` on top of this table. Entries of `layer` win on key collision.
    fn overlay(&mut self, layer: YearHolidays) {
        for (key, holiday) in layer.entries {
            if let Some(replaced) = self.entries.insert(key, holiday) {
                tracing::debug!(
                    year = self.year,
                    %key,
                    replaced = replaced.name,
                    by = holiday.name,
                    "holiday collision"
                );
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of distinct (month, day) keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: MonthDay) -> bool {
        self.entries.contains_key(&key)
    }

    /// The holiday name for `key`, if any.
    pub fn name(&self, key: MonthDay) -> Option<&'static str> {
        self.entries.get(&key).map(|h| h.name)
    }

    pub fn get(&self, key: MonthDay) -> Option<&Holiday> {
        self.entries.get(&key)
    }

    /// Keys in calendar order.
    pub fn keys(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.entries.keys().copied()
    }

    /// Holidays in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> + '_ {
        self.entries.values()
    }
}

/// The fixed-date holidays of `year`.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` for years outside the supported range.
pub fn fixed_holidays(year: i32) -> Result<YearHolidays> {
    ensure_supported(year)?;

    let mut table = YearHolidays::new(year);
    for &(key, name) in FIXED_HOLIDAYS {
        table.insert(key.in_year(year)?, name, HolidayKind::Fixed);
    }
    Ok(table)
}

/// The Ley Emiliani holidays of `year`, each moved to the Monday on or after its
/// nominal date and keyed by that Monday.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` for years outside the supported range.
pub fn resolve_movable_holidays(year: i32) -> Result<YearHolidays> {
    ensure_supported(year)?;

    let mut table = YearHolidays::new(year);
    for &(key, name) in MOVABLE_TO_MONDAY {
        let observed = next_monday(key.in_year(year)?);
        table.insert(observed, name, HolidayKind::Emiliani);
    }
    Ok(table)
}

/// The Easter-relative holidays of `year`.
///
/// Maundy Thursday and Good Friday are observed as computed. Ascension is moved
/// to Monday. Corpus Christi and Sacred Heart fall on a Monday by construction.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` for years outside the supported range.
pub fn resolve_easter_relative_holidays(year: i32) -> Result<YearHolidays> {
    let easter = easter_sunday(year)?;

    let mut table = YearHolidays::new(year);
    for rule in EASTER_RELATIVE {
        let computed = easter + Duration::days(rule.offset_days);
        let observed = if rule.shift_to_monday {
            next_monday(computed)
        } else {
            computed
        };
        table.insert(observed, rule.name, HolidayKind::EasterRelative);
    }
    Ok(table)
}

/// Build the complete holiday table for `year`.
///
/// Layers are applied as fixed, then Ley Emiliani, then Easter-relative.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` for years outside the supported range.
pub fn resolve_year_holidays(year: i32) -> Result<YearHolidays> {
    let mut table = fixed_holidays(year)?;
    table.overlay(resolve_movable_holidays(year)?);
    table.overlay(resolve_easter_relative_holidays(year)?);

    tracing::debug!(year, holidays = table.len(), "resolved year holidays");
    Ok(table)
}

/// Whether `date` is a holiday. Every Sunday is.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` if the date's year is outside the
/// supported range, Sundays included.
pub fn is_holiday(date: NaiveDate) -> Result<bool> {
    ensure_supported(date.year())?;

    if date.weekday() == Weekday::Sun {
        return Ok(true);
    }
    Ok(resolve_year_holidays(date.year())?.contains(MonthDay::of(date)))
}

/// The holiday name for `date`, or `None` on a working day.
///
/// Sundays report [`SUNDAY`] even when an official holiday falls on them.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` if the date's year is outside the
/// supported range, Sundays included.
pub fn holiday_name(date: NaiveDate) -> Result<Option<&'static str>> {
    ensure_supported(date.year())?;

    if date.weekday() == Weekday::Sun {
        return Ok(Some(SUNDAY));
    }
    Ok(resolve_year_holidays(date.year())?.name(MonthDay::of(date)))
}

/// All official holidays of `year` in calendar order. Ordinary Sundays are not
/// listed.
pub fn list_holidays(year: i32) -> Result<Vec<Holiday>> {
    Ok(resolve_year_holidays(year)?.iter().copied().collect())
}
