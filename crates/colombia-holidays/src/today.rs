//! Holiday queries for the current date, read from a [`Clock`].

use crate::clock::Clock;
use crate::engine::{holiday_name, is_holiday};
use crate::error::Result;

/// Whether the clock's current date is a holiday.
pub fn is_today_holiday<C: Clock + ?Sized>(clock: &C) -> Result<bool> {
    is_holiday(clock.today())
}

/// The holiday name for the clock's current date, if any.
pub fn today_holiday_name<C: Clock + ?Sized>(clock: &C) -> Result<Option<&'static str>> {
    holiday_name(clock.today())
}
