//! Binary converter
//!
//! Strings are stored as their UTF-8 bytes.

use docmap_core::{Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

/// Converter for `FieldType::Binary`
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryConverter;

impl Converter for BinaryConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Binary
    }

    fn mongoize(&self, _cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::Bytes(bytes) => Ok(Value::Bytes(bytes.clone())),
            Input::String(s) if s.is_empty() => Ok(Value::Null),
            Input::String(s) => Ok(Value::Bytes(s.as_bytes().to_vec())),
            _ => Err(unsupported_input(FieldType::Binary, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Bytes(bytes) => Ok(Input::Bytes(bytes.clone())),
            other => Err(unsupported_stored(FieldType::Binary, other)),
        }
    }
}
