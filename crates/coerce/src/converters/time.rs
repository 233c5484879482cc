//! Time converter
//!
//! Instants are stored as UTC timestamps. Wall-clock input (naive strings,
//! bare dates) is resolved in the policy's active zone; epoch numbers and
//! component sequences are already UTC.

use docmap_core::{Error, Result, Timestamp, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::parse::{parse_time, ParsedTime};
use crate::policy::TimeZonePolicy;
use crate::registry::{Context, Converter};
use crate::zone::{LocalTimestamp, ZoneId};

/// Longest accepted component sequence:
/// `[year, month, day, hour, minute, second, micros]`
pub const MAX_TIME_COMPONENTS: usize = 7;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Upper bound (inclusive) for each component after the year
const COMPONENT_MAX: [i64; MAX_TIME_COMPONENTS - 1] = [12, 31, 23, 59, 59, 999_999];
/// Lower bound for each component after the year
const COMPONENT_MIN: [i64; MAX_TIME_COMPONENTS - 1] = [1, 1, 0, 0, 0, 0];
const COMPONENT_NAMES: [&str; MAX_TIME_COMPONENTS] =
    ["year", "month", "day", "hour", "minute", "second", "micros"];

const SECOND_INDEX: usize = 5;
const MICROS_INDEX: usize = 6;

/// Converter for `FieldType::Time`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeConverter;

impl TimeConverter {
    /// Convert any accepted input to a UTC instant
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for unparseable strings, non-finite or out-of-range
    /// epoch numbers and malformed component sequences. `UnsupportedType`
    /// for booleans, bytes and documents.
    pub fn mongoize_timestamp(policy: &TimeZonePolicy, input: &Input) -> Result<Option<Timestamp>> {
        match input {
            Input::Null => Ok(None),
            Input::Timestamp(ts) => Ok(Some(*ts)),
            Input::Date(date) => Ok(Some(policy.active_zone().local_midnight(*date).to_utc())),
            Input::Int(secs) => Timestamp::checked_from_secs(*secs)
                .map(Some)
                .ok_or_else(|| epoch_error(secs.to_string())),
            Input::Float(secs) => Timestamp::from_secs_f64(*secs)
                .map(Some)
                .ok_or_else(|| epoch_error(secs.to_string())),
            Input::String(s) if s.trim().is_empty() => Ok(None),
            Input::String(s) => {
                let zone = policy.active_zone();
                let ts = match parse_time(s)? {
                    ParsedTime::Instant(instant) => Timestamp::from_datetime(&instant),
                    ParsedTime::Wall(wall) => Timestamp::from_datetime(&zone.localize(wall)),
                    ParsedTime::Date(date) => zone.local_midnight(date).to_utc(),
                };
                Ok(Some(ts))
            }
            Input::Sequence(parts) => timestamp_from_components(parts),
            Input::Bool(_) | Input::Bytes(_) | Input::Document(_) => {
                Err(unsupported_input(FieldType::Time, input))
            }
        }
    }

    /// Express a stored instant for presentation
    ///
    /// UTC when the policy says so, otherwise the active zone. Both are
    /// read from one snapshot.
    pub fn localize(policy: &TimeZonePolicy, ts: Timestamp) -> LocalTimestamp {
        let state = policy.snapshot();
        if state.use_utc {
            ZoneId::Utc.at(ts)
        } else {
            state.active_zone().at(ts)
        }
    }
}

fn epoch_error(input: String) -> Error {
    Error::invalid_format(FieldType::Time.name(), input, "epoch seconds out of range")
}

/// Build a UTC instant from `[year, month, day, hour, minute, second, micros]`
///
/// Missing trailing components default to `[_, 1, 1, 0, 0, 0, 0]`. An empty
/// sequence is `Ok(None)`. Components must be integers; the seconds may
/// carry a fraction, which is added to the micros.
///
/// ```
/// use docmap_coerce::{timestamp_from_components, Input, Timestamp};
///
/// let parts = [Input::Int(2010), Input::Int(1), Input::Int(1)];
/// assert_eq!(
///     timestamp_from_components(&parts).unwrap(),
///     Timestamp::from_components(2010, 1, 1, 0, 0, 0, 0)
/// );
/// ```
///
/// # Errors
///
/// `InvalidFormat` for more than seven components, non-numeric or
/// non-integral components, out-of-range fields and impossible dates.
pub fn timestamp_from_components(parts: &[Input]) -> Result<Option<Timestamp>> {
    if parts.is_empty() {
        return Ok(None);
    }
    if parts.len() > MAX_TIME_COMPONENTS {
        return Err(component_error(
            parts,
            format!("expected at most {} components", MAX_TIME_COMPONENTS),
        ));
    }

    let mut fields: [i64; MAX_TIME_COMPONENTS] = [0, 1, 1, 0, 0, 0, 0];
    let mut fraction_micros = 0i64;

    for (index, part) in parts.iter().enumerate() {
        let name = COMPONENT_NAMES[index];
        let whole = match part {
            Input::Int(i) => *i,
            Input::Float(f) if f.is_finite() && index == SECOND_INDEX => {
                fraction_micros = (f.fract() * MICROS_PER_SEC as f64).round() as i64;
                f.trunc() as i64
            }
            Input::Float(f) if f.is_finite() && f.fract() == 0.0 => *f as i64,
            Input::Float(_) => {
                return Err(component_error(parts, format!("{} must be a whole number", name)))
            }
            other => {
                return Err(component_error(
                    parts,
                    format!("{} must be numeric, got {}", name, other.type_name()),
                ))
            }
        };

        if index == 0 {
            if whole < 0 || whole > i32::MAX as i64 {
                return Err(component_error(parts, "year out of range".to_string()));
            }
        } else if whole < COMPONENT_MIN[index - 1] || whole > COMPONENT_MAX[index - 1] {
            return Err(component_error(parts, format!("{} out of range", name)));
        }
        fields[index] = whole;
    }

    if fraction_micros < 0 {
        return Err(component_error(parts, "second out of range".to_string()));
    }

    let midnight_micros = Timestamp::from_components(
        fields[0] as i32,
        fields[1] as u32,
        fields[2] as u32,
        fields[3] as u32,
        fields[4] as u32,
        fields[SECOND_INDEX] as u32,
        0,
    )
    .ok_or_else(|| component_error(parts, "no such calendar date".to_string()))?
    .as_micros();

    // Fractional seconds may push the micros past one second; the carry
    // lands in the next second.
    let micros = fields[MICROS_INDEX] + fraction_micros;
    Ok(Some(Timestamp::from_micros(midnight_micros + micros)))
}

fn component_error(parts: &[Input], reason: String) -> Error {
    Error::invalid_format(FieldType::Time.name(), format!("{:?}", parts), reason)
}

impl Converter for TimeConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Time
    }

    fn mongoize(&self, cx: &Context<'_>, input: &Input) -> Result<Value> {
        Self::mongoize_timestamp(cx.policy(), input).map(Value::from)
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Timestamp(ts) => Ok(Input::Timestamp(*ts)),
            other => Err(unsupported_stored(FieldType::Time, other)),
        }
    }

    fn mongoize_time(&self, cx: &Context<'_>, input: &Input) -> Result<Option<LocalTimestamp>> {
        let zone = cx.policy().active_zone();
        match input {
            Input::Date(date) => Ok(Some(zone.local_midnight(*date))),
            _ => Ok(Self::mongoize_timestamp(cx.policy(), input)?.map(|ts| zone.at(ts))),
        }
    }
}
