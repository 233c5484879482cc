//! Microsecond-precision UTC timestamp
//!
//! This is the store's canonical temporal wire type. Every temporal
//! conversion ends here, normalized to UTC.
//!
//! ## Precision
//!
//! Timestamps are stored as signed microseconds since Unix epoch
//! (1970-01-01 00:00:00 UTC), so instants before 1970 are representable.
//! Input finer than a microsecond is rounded to the nearest microsecond.
//!
//! ## Usage
//!
//! Never expose raw arithmetic. Use explicit constructors:
//!
//! ```
//! use docmap_core::Timestamp;
//!
//! let from_secs = Timestamp::checked_from_secs(1_262_304_000).unwrap();
//! let from_parts = Timestamp::from_components(2010, 1, 1, 0, 0, 0, 0).unwrap();
//! assert_eq!(from_secs, from_parts);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::CalendarDate;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Microsecond-precision instant, always UTC
///
/// ## Invariants
///
/// - Timestamps carry no zone; they are always UTC
/// - Timestamps are always in microseconds
/// - Timestamps are comparable and orderable
/// - The zero timestamp represents Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a timestamp for the current moment
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(millis.saturating_mul(1_000))
    }

    /// Create a timestamp from whole seconds since epoch
    ///
    /// Returns `None` when the instant is outside the representable range.
    pub fn checked_from_secs(secs: i64) -> Option<Self> {
        let micros = secs.checked_mul(MICROS_PER_SEC)?;
        Self::checked_from_micros(micros)
    }

    /// Create a timestamp from fractional seconds since epoch
    ///
    /// The fraction is rounded to the nearest microsecond. Returns `None`
    /// for NaN, infinities, and instants outside the representable range.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        let micros = (secs * MICROS_PER_SEC as f64).round();
        if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
            return None;
        }
        Self::checked_from_micros(micros as i64)
    }

    /// Create a timestamp from UTC calendar and clock components
    ///
    /// Returns `None` if any component is out of range for its field
    /// (month 13, February 30, hour 24, micros >= 1_000_000).
    pub fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        micros: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_micro_opt(hour, minute, second, micros)?;
        Some(Self::from_datetime(&Utc.from_utc_datetime(&naive)))
    }

    /// Normalize any zoned instant to a UTC timestamp
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Timestamp(datetime.timestamp_micros())
    }

    fn checked_from_micros(micros: i64) -> Option<Self> {
        let ts = Timestamp(micros);
        ts.try_to_datetime().map(|_| ts)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> i64 {
        self.0
    }

    /// Get milliseconds since Unix epoch (floors toward negative infinity)
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0.div_euclid(1_000)
    }

    /// Get whole seconds since Unix epoch (floors toward negative infinity)
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0.div_euclid(MICROS_PER_SEC)
    }

    /// Sub-second part in microseconds (always `0..1_000_000`)
    #[inline]
    pub const fn subsec_micros(&self) -> u32 {
        self.0.rem_euclid(MICROS_PER_SEC) as u32
    }

    /// The instant as a chrono UTC datetime
    ///
    /// Saturates at chrono's supported range for raw micros beyond it.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        self.try_to_datetime().unwrap_or(if self.0 < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    fn try_to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.as_secs(), self.subsec_micros() * 1_000)
    }

    /// UTC year
    pub fn year(&self) -> i32 {
        self.to_datetime().year()
    }

    /// UTC month (1-12)
    pub fn month(&self) -> u32 {
        self.to_datetime().month()
    }

    /// UTC day of month (1-31)
    pub fn day(&self) -> u32 {
        self.to_datetime().day()
    }

    /// UTC hour (0-23)
    pub fn hour(&self) -> u32 {
        self.to_datetime().hour()
    }

    /// UTC minute (0-59)
    pub fn minute(&self) -> u32 {
        self.to_datetime().minute()
    }

    /// UTC second (0-59)
    pub fn second(&self) -> u32 {
        self.to_datetime().second()
    }

    /// The UTC calendar date of this instant, dropping the time of day
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from(self.to_datetime().date_naive())
    }

    /// RFC 3339 rendering with microseconds and a `Z` suffix
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime()
            .format("%Y-%m-%dT%H:%M:%S%.6fZ")
            .to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timestamp::from_datetime(&datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.to_datetime()
    }
}

// ============================================================================
// Tests
// ============================================================================
