//! Calendar date without time of day or zone

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A year, month and day with no time of day and no zone
///
/// Immutable value type. Dates reach storage as a UTC [`Timestamp`]
/// at midnight of the resolved zone and come back as the UTC date of
/// the stored instant.
///
/// [`Timestamp`]: super::Timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, returning `None` for impossible dates (2010-02-30)
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying chrono date
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
