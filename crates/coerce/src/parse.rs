//! Locale-independent date and time string parsing
//!
//! # Supported date formats
//!
//! - **ISO**: `"2010-01-01"`, optionally followed by a time (`"2010-01-01T10:00:00Z"`)
//! - **Year first**: `"2010/01/01"`, `"2010.01.01"`, `"20100101"`
//! - **Day first**: `"1st Jan 2010"`, `"01-Jan-2010"`, `"Fri, 1 January 2010"`
//! - **Month first**: `"Jan 1, 2010"`, `"January 1st 2010"`
//!
//! Month and weekday names are English regardless of locale. Numeric dates
//! with the year last (`"01/02/2010"`) are rejected: day-first and
//! month-first readings disagree and guessing would store the wrong day.
//!
//! # Supported time formats
//!
//! RFC 3339 and RFC 2822 keep their explicit offset. Naive
//! `"YYYY-MM-DD HH:MM[:SS[.f]]"` is a wall-clock time for the caller to
//! resolve in a zone. Anything else falls back to the date formats.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use docmap_core::{CalendarDate, Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";
const WEEKDAYS: &str =
    "monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thur|thu|fri|sat|sun";

// Optional time of day after a date: `HH:MM[:SS[.f]]` and an optional offset.
// Captures hour, minute and second.
const TIME_TAIL: &str = r"(\d{1,2}):(\d{2})(?::(\d{2})(?:\.\d+)?)?\s*(?:Z|UTC|GMT|[+-]\d{2}:?\d{2})?";

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(\d{{4}})-(\d{{1,2}})-(\d{{1,2}})(?:[T ]{t})?$",
        t = TIME_TAIL
    ))
    .expect("valid ISO pattern")
});

static YEAR_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})([/.])(\d{1,2})([/.])(\d{1,2})$").expect("valid year-first pattern")
});

static COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid compact pattern"));

static DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:(?:{w})\.?,?\s+)?(\d{{1,2}})(?:st|nd|rd|th)?[\s\-]+({m})\.?,?[\s\-]+(\d{{4}})(?:,?\s+{t})?$",
        w = WEEKDAYS,
        m = MONTHS,
        t = TIME_TAIL
    ))
    .expect("valid day-first pattern")
});

static MONTH_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:(?:{w})\.?,?\s+)?({m})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})$",
        w = WEEKDAYS,
        m = MONTHS
    ))
    .expect("valid month-first pattern")
});

static YEAR_LAST_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[/.\-]\d{1,2}[/.\-]\d{4}$").expect("valid numeric pattern"));

const NAIVE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// The shape a time string was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// An instant with an explicit offset
    Instant(DateTime<FixedOffset>),
    /// A wall-clock time with no zone
    Wall(NaiveDateTime),
    /// A bare calendar date
    Date(CalendarDate),
}

/// Parse a calendar date
///
/// # Errors
///
/// Returns `InvalidFormat` (target `"Date"`) if no supported format matches
/// or the components name an impossible date.
pub fn parse_date(input: &str) -> Result<CalendarDate> {
    let trimmed = input.trim();
    match match_date(trimmed) {
        Ok(date) => Ok(date),
        Err(reason) => {
            debug!(input = trimmed, reason, "Unparseable date string");
            Err(Error::invalid_format("Date", input, reason))
        }
    }
}

/// Parse a time string
///
/// # Errors
///
/// Returns `InvalidFormat` (target `"Time"`) if neither a time nor a date
/// format matches.
pub fn parse_time(input: &str) -> Result<ParsedTime> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ParsedTime::Instant(instant));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(ParsedTime::Instant(instant));
    }
    for format in OFFSET_TIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(trimmed, format) {
            return Ok(ParsedTime::Instant(instant));
        }
    }
    for format in NAIVE_TIME_FORMATS {
        if let Ok(wall) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ParsedTime::Wall(wall));
        }
    }

    match match_date(trimmed) {
        Ok(date) => Ok(ParsedTime::Date(date)),
        Err(reason) => {
            debug!(input = trimmed, reason, "Unparseable time string");
            Err(Error::invalid_format("Time", input, reason))
        }
    }
}

fn match_date(s: &str) -> std::result::Result<CalendarDate, &'static str> {
    if s.is_empty() {
        return Err("empty string");
    }

    if let Some(caps) = ISO_DATE.captures(s) {
        check_time_of_day(&caps, 4)?;
        return build(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = YEAR_FIRST.captures(s) {
        if caps[2] != caps[4] {
            return Err("mixed separators");
        }
        return build(&caps[1], &caps[3], &caps[5]);
    }
    if let Some(caps) = COMPACT.captures(s) {
        return build(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = DAY_FIRST.captures(s) {
        check_time_of_day(&caps, 4)?;
        let month = month_number(&caps[2]).ok_or("unknown month name")?;
        return build_with_month(&caps[3], month, &caps[1]);
    }
    if let Some(caps) = MONTH_FIRST.captures(s) {
        let month = month_number(&caps[1]).ok_or("unknown month name")?;
        return build_with_month(&caps[3], month, &caps[2]);
    }
    if YEAR_LAST_NUMERIC.is_match(s) {
        return Err("ambiguous day/month order");
    }

    Err("no date format matched")
}

/// Range-check the hour, minute and second groups starting at `first`.
/// The time is otherwise discarded; a missing tail passes.
fn check_time_of_day(caps: &Captures<'_>, first: usize) -> std::result::Result<(), &'static str> {
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let Some(hour) = field(first) else {
        return Ok(());
    };
    let minute = field(first + 1).unwrap_or(0);
    let second = field(first + 2).unwrap_or(0);
    // 60 admits a leap second
    if hour > 23 || minute > 59 || second > 60 {
        return Err("time of day out of range");
    }
    Ok(())
}

fn build(year: &str, month: &str, day: &str) -> std::result::Result<CalendarDate, &'static str> {
    let month: u32 = month.parse().map_err(|_| "month is not a number")?;
    build_with_month(year, month, day)
}

fn build_with_month(
    year: &str,
    month: u32,
    day: &str,
) -> std::result::Result<CalendarDate, &'static str> {
    let year: i32 = year.parse().map_err(|_| "year is not a number")?;
    let day: u32 = day.parse().map_err(|_| "day is not a number")?;
    CalendarDate::new(year, month, day).ok_or("no such calendar date")
}

fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_ascii_lowercase();
    let month = match lowered.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
