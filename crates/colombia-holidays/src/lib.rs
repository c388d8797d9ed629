//! # colombia-holidays
//!
//! Deterministic Colombian public holiday calendar.
//!
//! Colombia observes a small set of fixed-date holidays, a set of holidays that
//! the Ley Emiliani (Law 51 of 1983) moves to the following Monday, a handful of
//! religious holidays anchored to Easter Sunday, and treats every Sunday as a
//! holiday. This crate resolves those rules into a per-year table and answers
//! point queries against it.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use colombia_holidays::{holiday_name, is_holiday};
//!
//! let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
//! assert!(is_holiday(christmas).unwrap());
//! assert_eq!(holiday_name(christmas).unwrap(), Some("Navidad (Christmas Day)"));
//! ```
//!
//! ## Modules
//!
//! - [`easter`] — Gregorian Easter Sunday (Meeus/Jones/Butcher)
//! - [`shift`] — Ley Emiliani "move to the following Monday" rule
//! - [`rules`] — Static holiday tables
//! - [`engine`] — Per-year holiday tables and date queries
//! - [`clock`] — Injectable "today" source
//! - [`today`] — Queries bound to a [`Clock`]
//! - [`error`] — Error types

pub mod clock;
pub mod easter;
pub mod engine;
pub mod error;
pub mod rules;
pub mod shift;
pub mod today;

pub use clock::{Clock, FixedClock, SystemClock};
pub use easter::{easter_sunday, MAX_YEAR, MIN_YEAR};
pub use engine::{
    fixed_holidays, holiday_name, is_holiday, list_holidays, resolve_easter_relative_holidays,
    resolve_movable_holidays, resolve_year_holidays, Holiday, HolidayKind, MonthDay,
    YearHolidays,
};
pub use error::HolidayError;
pub use shift::next_monday;
pub use today::{is_today_holiday, today_holiday_name};
