//! Time zone identifiers and zone-relative instants
//!
//! [`ZoneId`] names the zone a "local" wall-clock time is resolved in.
//! [`LocalTimestamp`] is an instant expressed in such a zone; it is the
//! intermediate every date takes on its way to a UTC [`Timestamp`].
//!
//! ## Wall-clock resolution
//!
//! - Ambiguous wall times (DST fall-back) resolve to the earlier instant
//! - Nonexistent wall times (DST spring-forward) move forward to the first
//!   valid wall time, in 15 minute steps

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, NaiveTime,
    Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use docmap_core::{CalendarDate, Error, Result, Timestamp};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

/// Friendly zone names accepted alongside IANA identifiers
const ZONE_ALIASES: &[(&str, &str)] = &[
    ("International Date Line West", "Etc/GMT+12"),
    ("Hawaii", "Pacific/Honolulu"),
    ("Alaska", "America/Juneau"),
    ("Pacific Time (US & Canada)", "America/Los_Angeles"),
    ("Arizona", "America/Phoenix"),
    ("Mountain Time (US & Canada)", "America/Denver"),
    ("Central Time (US & Canada)", "America/Chicago"),
    ("Mexico City", "America/Mexico_City"),
    ("Eastern Time (US & Canada)", "America/New_York"),
    ("Atlantic Time (Canada)", "America/Halifax"),
    ("Buenos Aires", "America/Argentina/Buenos_Aires"),
    ("Brasilia", "America/Sao_Paulo"),
    ("Azores", "Atlantic/Azores"),
    ("London", "Europe/London"),
    ("Dublin", "Europe/Dublin"),
    ("Lisbon", "Europe/Lisbon"),
    ("Amsterdam", "Europe/Amsterdam"),
    ("Berlin", "Europe/Berlin"),
    ("Madrid", "Europe/Madrid"),
    ("Paris", "Europe/Paris"),
    ("Rome", "Europe/Rome"),
    ("Stockholm", "Europe/Stockholm"),
    ("Athens", "Europe/Athens"),
    ("Helsinki", "Europe/Helsinki"),
    ("Cairo", "Africa/Cairo"),
    ("Istanbul", "Europe/Istanbul"),
    ("Moscow", "Europe/Moscow"),
    ("Dubai", "Asia/Dubai"),
    ("Abu Dhabi", "Asia/Dubai"),
    ("Karachi", "Asia/Karachi"),
    ("Mumbai", "Asia/Kolkata"),
    ("New Delhi", "Asia/Kolkata"),
    ("Kolkata", "Asia/Kolkata"),
    ("Kathmandu", "Asia/Kathmandu"),
    ("Dhaka", "Asia/Dhaka"),
    ("Bangkok", "Asia/Bangkok"),
    ("Jakarta", "Asia/Jakarta"),
    ("Beijing", "Asia/Shanghai"),
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Singapore", "Asia/Singapore"),
    ("Taipei", "Asia/Taipei"),
    ("Seoul", "Asia/Seoul"),
    ("Osaka", "Asia/Tokyo"),
    ("Sapporo", "Asia/Tokyo"),
    ("Tokyo", "Asia/Tokyo"),
    ("Adelaide", "Australia/Adelaide"),
    ("Brisbane", "Australia/Brisbane"),
    ("Melbourne", "Australia/Melbourne"),
    ("Sydney", "Australia/Sydney"),
    ("Auckland", "Pacific/Auckland"),
    ("Wellington", "Pacific/Auckland"),
];

static ALIAS_INDEX: Lazy<FxHashMap<String, &'static str>> = Lazy::new(|| {
    ZONE_ALIASES
        .iter()
        .map(|(alias, iana)| (alias.to_ascii_lowercase(), *iana))
        .collect()
});

static FIXED_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:utc|gmt)?([+-])(\d{1,2})(?::?(\d{2}))?$").expect("valid offset pattern")
});

/// Max forward steps when a wall time falls in a DST gap (48 * 15min = 12h)
const GAP_SEARCH_STEPS: usize = 48;

/// A zone that wall-clock times can be resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneId {
    /// The system/process local zone
    Local,
    /// Coordinated Universal Time
    Utc,
    /// An IANA zone from the tz database
    Named(Tz),
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl ZoneId {
    /// Parse a zone name
    ///
    /// Accepts IANA identifiers (`Asia/Tokyo`), `UTC`/`GMT`/`Z`, `local`,
    /// fixed offsets (`+09:00`, `-0530`, `UTC+9`) and friendly names
    /// (`Tokyo`, `Eastern Time (US & Canada)`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for names that match none of the above.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let lowered = trimmed.to_ascii_lowercase();

        match lowered.as_str() {
            "" => return Err(Error::invalid_config("time zone name is empty")),
            "local" => return Ok(ZoneId::Local),
            "utc" | "gmt" | "z" | "etc/utc" | "etc/gmt" | "zulu" => return Ok(ZoneId::Utc),
            _ => {}
        }

        if let Some(iana) = ALIAS_INDEX.get(&lowered) {
            if let Ok(tz) = iana.parse::<Tz>() {
                return Ok(ZoneId::Named(tz));
            }
        }

        if let Ok(tz) = trimmed.parse::<Tz>() {
            return Ok(ZoneId::Named(tz));
        }

        if let Some(offset) = parse_fixed_offset(trimmed) {
            return Ok(ZoneId::Fixed(offset));
        }

        Err(Error::invalid_config(format!(
            "unknown time zone '{}'",
            trimmed
        )))
    }

    /// Canonical name of the zone
    pub fn name(&self) -> String {
        match self {
            ZoneId::Local => "local".to_string(),
            ZoneId::Utc => "UTC".to_string(),
            ZoneId::Named(tz) => tz.name().to_string(),
            ZoneId::Fixed(offset) => offset.to_string(),
        }
    }

    /// Resolve a wall-clock time in this zone
    pub fn localize(&self, wall: NaiveDateTime) -> DateTime<FixedOffset> {
        match self {
            ZoneId::Local => resolve_wall_time(&Local, wall),
            ZoneId::Utc => resolve_wall_time(&Utc, wall),
            ZoneId::Named(tz) => resolve_wall_time(tz, wall),
            ZoneId::Fixed(offset) => resolve_wall_time(offset, wall),
        }
    }

    /// Midnight at the start of `date` in this zone
    pub fn local_midnight(&self, date: CalendarDate) -> LocalTimestamp {
        let wall = date.naive().and_time(NaiveTime::MIN);
        LocalTimestamp::new(self.localize(wall), *self)
    }

    /// Express a UTC instant in this zone
    pub fn at(&self, ts: Timestamp) -> LocalTimestamp {
        let utc = ts.to_datetime();
        let datetime = match self {
            ZoneId::Local => fixed(utc.with_timezone(&Local)),
            ZoneId::Utc => fixed(utc),
            ZoneId::Named(tz) => fixed(utc.with_timezone(tz)),
            ZoneId::Fixed(offset) => utc.with_timezone(offset),
        };
        LocalTimestamp::new(datetime, *self)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::str::FromStr for ZoneId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ZoneId::parse(s)
    }
}

fn parse_fixed_offset(name: &str) -> Option<FixedOffset> {
    let caps = FIXED_OFFSET.captures(name)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn fixed<Z: TimeZone>(datetime: DateTime<Z>) -> DateTime<FixedOffset> {
    let offset = datetime.offset().fix();
    datetime.with_timezone(&offset)
}

fn resolve_wall_time<Z: TimeZone>(zone: &Z, wall: NaiveDateTime) -> DateTime<FixedOffset> {
    let mut candidate = wall;
    for _ in 0..GAP_SEARCH_STEPS {
        match zone.from_local_datetime(&candidate) {
            LocalResult::Single(datetime) => return fixed(datetime),
            LocalResult::Ambiguous(earliest, _) => return fixed(earliest),
            LocalResult::None => candidate = candidate + Duration::minutes(15),
        }
    }
    // No valid wall time within the search window; read the wall time as UTC.
    fixed(zone.from_utc_datetime(&wall))
}

/// An instant expressed relative to a resolved zone
///
/// Equality compares both the instant and the zone it was resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimestamp {
    datetime: DateTime<FixedOffset>,
    zone: ZoneId,
}

impl LocalTimestamp {
    /// Pair an offset datetime with the zone it was resolved in
    pub fn new(datetime: DateTime<FixedOffset>, zone: ZoneId) -> Self {
        Self { datetime, zone }
    }

    /// The offset datetime
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// The zone this instant was resolved in
    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// Offset from UTC at this instant, in seconds east
    pub fn offset_seconds(&self) -> i32 {
        self.datetime.offset().local_minus_utc()
    }

    /// Local year
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Local month (1-12)
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    /// Local day of month
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Local hour
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    /// Local minute
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    /// Local second
    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// Sub-second part in microseconds
    pub fn subsec_micros(&self) -> u32 {
        self.datetime.nanosecond() / 1_000
    }

    /// The local calendar date
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from(self.datetime.date_naive())
    }

    /// Normalize to a UTC timestamp
    pub fn to_utc(&self) -> Timestamp {
        Timestamp::from_datetime(&self.datetime)
    }
}

impl From<LocalTimestamp> for Timestamp {
    fn from(local: LocalTimestamp) -> Self {
        local.to_utc()
    }
}

impl std::fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z"),
            self.zone
        )
    }
}
