//! Float converter
//!
//! Integers widen. Strings parse as floats; `"NaN"` and `"inf"` are
//! rejected.

use docmap_core::{Error, Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

/// Converter for `FieldType::Float`
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatConverter;

impl Converter for FloatConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Float
    }

    fn mongoize(&self, _cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::Float(f) => Ok(Value::Float(*f)),
            Input::Int(i) => Ok(Value::Float(*i as f64)),
            Input::String(s) if s.trim().is_empty() => Ok(Value::Null),
            Input::String(s) => match s.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                _ => Err(Error::invalid_format(
                    FieldType::Float.name(),
                    s.as_str(),
                    "not a finite number",
                )),
            },
            _ => Err(unsupported_input(FieldType::Float, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Float(f) => Ok(Input::Float(*f)),
            Value::Int(i) => Ok(Input::Float(*i as f64)),
            other => Err(unsupported_stored(FieldType::Float, other)),
        }
    }
}
