//! Boolean converter
//!
//! Accepts booleans, `0`/`1` numbers and the usual yes/no tokens.

use docmap_core::{Error, Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

const TRUE_TOKENS: &[&str] = &["true", "t", "yes", "y", "1", "1.0"];
const FALSE_TOKENS: &[&str] = &["false", "f", "no", "n", "0", "0.0"];

/// Converter for `FieldType::Boolean`
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanConverter;

fn invalid(input: String) -> Error {
    Error::invalid_format(FieldType::Boolean.name(), input, "not a boolean")
}

impl Converter for BooleanConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Boolean
    }

    fn mongoize(&self, _cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::Bool(b) => Ok(Value::Bool(*b)),
            Input::Int(1) => Ok(Value::Bool(true)),
            Input::Int(0) => Ok(Value::Bool(false)),
            Input::Int(i) => Err(invalid(i.to_string())),
            Input::Float(f) if *f == 1.0 => Ok(Value::Bool(true)),
            Input::Float(f) if *f == 0.0 => Ok(Value::Bool(false)),
            Input::Float(f) => Err(invalid(f.to_string())),
            Input::String(s) if s.trim().is_empty() => Ok(Value::Null),
            Input::String(s) => {
                let token = s.trim().to_ascii_lowercase();
                if TRUE_TOKENS.contains(&token.as_str()) {
                    Ok(Value::Bool(true))
                } else if FALSE_TOKENS.contains(&token.as_str()) {
                    Ok(Value::Bool(false))
                } else {
                    Err(invalid(s.clone()))
                }
            }
            _ => Err(unsupported_input(FieldType::Boolean, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Bool(b) => Ok(Input::Bool(*b)),
            other => Err(unsupported_stored(FieldType::Boolean, other)),
        }
    }
}
