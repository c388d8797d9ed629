//! Ley Emiliani Monday shifting.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Move `date` to the following Monday, or return it unchanged if it already is one.
///
/// Weekdays are indexed Monday = 0 through Sunday = 6, and the shift is
/// `(7 - index) % 7` days. A Monday would give 0, which is handled as its own
/// case rather than as "shift by a full week".
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    if is_monday(date) {
        return date;
    }

    let days_until_monday = (7 - date.weekday().num_days_from_monday()) % 7;
    let shifted = date + Duration::days(i64::from(days_until_monday));
    tracing::trace!(%date, %shifted, "moved holiday to Monday");
    shifted
}

/// Whether `date` falls on a Monday.
pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}
