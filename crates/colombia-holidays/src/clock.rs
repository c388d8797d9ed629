//! Sources of "today".

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
