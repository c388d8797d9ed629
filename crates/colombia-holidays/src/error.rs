//! Error types for holiday computations.

use thiserror::Error;

use crate::easter::{MAX_YEAR, MIN_YEAR};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// The year lies outside the range the Gregorian Easter algorithm covers.
    #[error("Unsupported year {year}: expected {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    UnsupportedYear { year: i32 },

    /// A month/day pair that does not exist in the given year.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, HolidayError>;
