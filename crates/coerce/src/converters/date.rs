//! Date converter
//!
//! Dates are stored as the UTC instant of midnight in the active zone and
//! loaded back as the UTC calendar date of the stored instant.
//!
//! ## Round trips
//!
//! `demongoize(mongoize(d)) == d` whenever the active zone is UTC at
//! midnight of `d`. Zones east of UTC store the previous UTC day (Tokyo
//! midnight on 2010-01-01 is 2009-12-31T15:00Z), so the loaded date moves
//! back a day. This loss is expected.

use docmap_core::{CalendarDate, Result, Timestamp, Value};
use tracing::trace;

use super::{retarget, unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::parse::parse_date;
use crate::policy::TimeZonePolicy;
use crate::registry::{Context, Converter};
use crate::zone::LocalTimestamp;

/// Converter for `FieldType::Date`
#[derive(Debug, Default, Clone, Copy)]
pub struct DateConverter;

impl DateConverter {
    /// Midnight of `date` in the policy's active zone
    ///
    /// With zone awareness on, that is the configured zone (or the system
    /// zone when none is configured). With it off, the configured zone is
    /// ignored and the system zone is used.
    pub fn to_local_timestamp(policy: &TimeZonePolicy, date: CalendarDate) -> LocalTimestamp {
        policy.active_zone().local_midnight(date)
    }

    /// Keep only the UTC calendar date of a stored instant
    pub fn demongoize_timestamp(stored: Option<Timestamp>) -> Option<CalendarDate> {
        stored.map(|ts| ts.date())
    }

    /// Convert any accepted input to the stored instant
    ///
    /// - `Null` and blank strings: `None`
    /// - `Date`: midnight in the active zone, normalized to UTC
    /// - `String`: parsed as a calendar date, then as `Date`
    /// - `Int`/`Float`: epoch seconds, UTC
    /// - `Sequence`: `[year, month, day, hour, minute, second, micros]`, UTC
    /// - `Timestamp`: unchanged
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for unparseable strings and bad numeric input,
    /// `UnsupportedType` for booleans, bytes and documents.
    pub fn mongoize_timestamp(cx: &Context<'_>, input: &Input) -> Result<Option<Timestamp>> {
        match input {
            Input::Null => Ok(None),
            Input::Date(date) => Ok(Some(mongoize_date(cx.policy(), *date))),
            Input::String(s) if s.trim().is_empty() => Ok(None),
            Input::String(s) => {
                let date = parse_date(s)?;
                Ok(Some(mongoize_date(cx.policy(), date)))
            }
            Input::Int(_) | Input::Float(_) | Input::Sequence(_) => {
                trace!(input = input.type_name(), "Date delegating to Time");
                let stored = cx
                    .mongoize_as(&FieldType::Time, input)
                    .map_err(|e| retarget(e, FieldType::Date))?;
                match stored {
                    Value::Timestamp(ts) => Ok(Some(ts)),
                    Value::Null => Ok(None),
                    other => Err(unsupported_stored(FieldType::Date, &other)),
                }
            }
            Input::Timestamp(ts) => Ok(Some(*ts)),
            Input::Bool(_) | Input::Bytes(_) | Input::Document(_) => {
                Err(unsupported_input(FieldType::Date, input))
            }
        }
    }
}

fn mongoize_date(policy: &TimeZonePolicy, date: CalendarDate) -> Timestamp {
    DateConverter::to_local_timestamp(policy, date).to_utc()
}

impl Converter for DateConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Date
    }

    fn mongoize(&self, cx: &Context<'_>, input: &Input) -> Result<Value> {
        Self::mongoize_timestamp(cx, input).map(Value::from)
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Timestamp(ts) => Ok(Input::from(Self::demongoize_timestamp(Some(*ts)))),
            other => Err(unsupported_stored(FieldType::Date, other)),
        }
    }

    fn mongoize_time(&self, cx: &Context<'_>, input: &Input) -> Result<Option<LocalTimestamp>> {
        match input {
            Input::Date(date) => Ok(Some(Self::to_local_timestamp(cx.policy(), *date))),
            _ => {
                let stored = Self::mongoize_timestamp(cx, input)?;
                let zone = cx.policy().active_zone();
                Ok(stored.map(|ts| zone.at(ts)))
            }
        }
    }
}

/// Instance-level conversions on a date
///
/// ```
/// use docmap_coerce::{CalendarDate, DateMongoize, TimeZonePolicy, Timestamp};
///
/// let policy = TimeZonePolicy::new();
/// policy.set_zone_name("UTC").unwrap();
///
/// let date = CalendarDate::new(2010, 1, 1).unwrap();
/// assert_eq!(
///     date.mongoize(&policy),
///     Timestamp::from_components(2010, 1, 1, 0, 0, 0, 0).unwrap()
/// );
/// ```
pub trait DateMongoize {
    /// Midnight of this date in the active zone
    fn mongoize_time(&self, policy: &TimeZonePolicy) -> LocalTimestamp;

    /// The stored instant for this date; never null
    fn mongoize(&self, policy: &TimeZonePolicy) -> Timestamp;
}

impl DateMongoize for CalendarDate {
    fn mongoize_time(&self, policy: &TimeZonePolicy) -> LocalTimestamp {
        DateConverter::to_local_timestamp(policy, *self)
    }

    fn mongoize(&self, policy: &TimeZonePolicy) -> Timestamp {
        mongoize_date(policy, *self)
    }
}
