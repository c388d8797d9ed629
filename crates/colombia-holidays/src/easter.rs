//! Gregorian Easter Sunday.
//!
//! Uses the anonymous Gregorian algorithm published by Meeus, Jones and Butcher.
//! Every step is integer division or remainder over non-negative operands, so
//! truncating division matches floor division throughout.

use chrono::NaiveDate;

use crate::error::{HolidayError, Result};

/// First year of the Gregorian computus.
pub const MIN_YEAR: i32 = 1583;

/// Last supported year. Keeps every derived date within four-digit years.
pub const MAX_YEAR: i32 = 9999;

/// Return the date of Easter Sunday for `year`.
///
/// # Errors
/// Returns `HolidayError::UnsupportedYear` if `year` is outside
/// [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    ensure_supported(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let (month, day) = (month as u32, day as u32);
    let easter = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::InvalidDate { year, month, day })?;

    tracing::trace!(year, %easter, "computed Easter Sunday");
    Ok(easter)
}

/// Fail with `UnsupportedYear` unless `year` is in the supported range.
pub(crate) fn ensure_supported(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::UnsupportedYear { year })
    }
}
