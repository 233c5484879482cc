//! String converter
//!
//! Scalars render to their canonical text. Whitespace is kept; only the
//! empty string counts as blank.

use docmap_core::{Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

/// Converter for `FieldType::String`
#[derive(Debug, Default, Clone, Copy)]
pub struct StringConverter;

impl Converter for StringConverter {
    fn field_type(&self) -> FieldType {
        FieldType::String
    }

    fn mongoize(&self, _cx: &Context<'_>, input: &Input) -> Result<Value> {
        let text = match input {
            Input::Null => return Ok(Value::Null),
            Input::String(s) if s.is_empty() => return Ok(Value::Null),
            Input::String(s) => s.clone(),
            Input::Bool(b) => b.to_string(),
            Input::Int(i) => i.to_string(),
            Input::Float(f) => format!("{:?}", f),
            Input::Date(date) => date.to_string(),
            Input::Timestamp(ts) => ts.to_rfc3339(),
            Input::Bytes(_) | Input::Sequence(_) | Input::Document(_) => {
                return Err(unsupported_input(FieldType::String, input))
            }
        };
        Ok(Value::String(text))
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::String(s) => Ok(Input::String(s.clone())),
            Value::Bool(b) => Ok(Input::String(b.to_string())),
            Value::Int(i) => Ok(Input::String(i.to_string())),
            Value::Float(f) => Ok(Input::String(format!("{:?}", f))),
            Value::Timestamp(ts) => Ok(Input::String(ts.to_rfc3339())),
            other => Err(unsupported_stored(FieldType::String, other)),
        }
    }
}
