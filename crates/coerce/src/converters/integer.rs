//! Integer converter
//!
//! Floats truncate toward zero. Numeric strings parse as integers first,
//! then as floats.

use docmap_core::{Error, Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

// 2^63 as f64; anything at or past it does not fit an i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converter for `FieldType::Integer`
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerConverter;

fn truncate(f: f64) -> Option<i64> {
    if f.is_finite() && f >= -I64_BOUND && f < I64_BOUND {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn invalid(input: impl Into<String>, reason: &str) -> Error {
    Error::invalid_format(FieldType::Integer.name(), input, reason)
}

impl Converter for IntegerConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Integer
    }

    fn mongoize(&self, _cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::Int(i) => Ok(Value::Int(*i)),
            Input::Float(f) => truncate(*f)
                .map(Value::Int)
                .ok_or_else(|| invalid(f.to_string(), "not a finite integer-sized number")),
            Input::String(s) if s.trim().is_empty() => Ok(Value::Null),
            Input::String(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(Value::Int(i));
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(truncate)
                    .map(Value::Int)
                    .ok_or_else(|| invalid(s.as_str(), "not a number"))
            }
            _ => Err(unsupported_input(FieldType::Integer, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Int(i) => Ok(Input::Int(*i)),
            Value::Float(f) => truncate(*f)
                .map(Input::Int)
                .ok_or_else(|| invalid(f.to_string(), "not a finite integer-sized number")),
            other => Err(unsupported_stored(FieldType::Integer, other)),
        }
    }
}
