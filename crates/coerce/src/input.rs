//! Application-side values
//!
//! [`Input`] is the closed set of value shapes a converter can be handed.
//! Converters dispatch on it with `match`, so the list of accepted shapes
//! (and the fallback for everything else) is checked at compile time.

use docmap_core::{CalendarDate, Timestamp, Value};
use std::collections::BTreeMap;

use crate::field_type::FieldType;

/// A value on the application side of a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer (also read as epoch seconds by temporal converters)
    Int(i64),
    /// Float (also read as fractional epoch seconds by temporal converters)
    Float(f64),
    /// String
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Calendar date
    Date(CalendarDate),
    /// UTC instant
    Timestamp(Timestamp),
    /// Ordered sequence (also read as date/time components)
    Sequence(Vec<Input>),
    /// Keyed document
    Document(BTreeMap<String, Input>),
}

impl Input {
    /// Build a sequence from anything convertible to inputs
    ///
    /// ```
    /// use docmap_coerce::Input;
    ///
    /// let parts = Input::sequence([2010, 1, 1, 0, 0, 0, 0]);
    /// assert_eq!(parts.type_name(), "Sequence");
    /// ```
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Input>,
    {
        Input::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Null => "Null",
            Input::Bool(_) => "Bool",
            Input::Int(_) => "Int",
            Input::Float(_) => "Float",
            Input::String(_) => "String",
            Input::Bytes(_) => "Bytes",
            Input::Date(_) => "Date",
            Input::Timestamp(_) => "Timestamp",
            Input::Sequence(_) => "Sequence",
            Input::Document(_) => "Document",
        }
    }

    /// The field type this value converts through when no type is declared
    ///
    /// `None` for `Null`, which mongoizes to null under every type.
    pub fn natural_type(&self) -> Option<FieldType> {
        match self {
            Input::Null => None,
            Input::Bool(_) => Some(FieldType::Boolean),
            Input::Int(_) => Some(FieldType::Integer),
            Input::Float(_) => Some(FieldType::Float),
            Input::String(_) => Some(FieldType::String),
            Input::Bytes(_) => Some(FieldType::Binary),
            Input::Date(_) => Some(FieldType::Date),
            Input::Timestamp(_) => Some(FieldType::Time),
            Input::Sequence(_) => Some(FieldType::Array),
            Input::Document(_) => Some(FieldType::Document),
        }
    }

    /// Null, an empty or whitespace-only string, or an empty sequence
    pub fn is_blank(&self) -> bool {
        match self {
            Input::Null => true,
            Input::String(s) => s.trim().is_empty(),
            Input::Sequence(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Input::Null)
    }

    /// Get the date if this is a Date value
    pub fn as_date(&self) -> Option<CalendarDate> {
        match self {
            Input::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Get the instant if this is a Timestamp value
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Input::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Input::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Structural conversion from wire values
// ============================================================================

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Int(i) => Input::Int(i),
            Value::Float(f) => Input::Float(f),
            Value::String(s) => Input::String(s),
            Value::Bytes(b) => Input::Bytes(b),
            Value::Array(items) => Input::Sequence(items.into_iter().map(Input::from).collect()),
            Value::Object(fields) => {
                Input::Document(fields.into_iter().map(|(k, v)| (k, Input::from(v))).collect())
            }
            Value::Timestamp(ts) => Input::Timestamp(ts),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::String(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::String(s)
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<i64> for Input {
    fn from(i: i64) -> Self {
        Input::Int(i)
    }
}

impl From<i32> for Input {
    fn from(i: i32) -> Self {
        Input::Int(i as i64)
    }
}

impl From<f64> for Input {
    fn from(f: f64) -> Self {
        Input::Float(f)
    }
}

impl From<Vec<u8>> for Input {
    fn from(b: Vec<u8>) -> Self {
        Input::Bytes(b)
    }
}

impl From<CalendarDate> for Input {
    fn from(date: CalendarDate) -> Self {
        Input::Date(date)
    }
}

impl From<Timestamp> for Input {
    fn from(ts: Timestamp) -> Self {
        Input::Timestamp(ts)
    }
}

impl From<Vec<Input>> for Input {
    fn from(items: Vec<Input>) -> Self {
        Input::Sequence(items)
    }
}

impl From<BTreeMap<String, Input>> for Input {
    fn from(fields: BTreeMap<String, Input>) -> Self {
        Input::Document(fields)
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}

impl From<()> for Input {
    fn from(_: ()) -> Self {
        Input::Null
    }
}
