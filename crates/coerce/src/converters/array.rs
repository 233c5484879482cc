//! Array converter
//!
//! Elements carry no declared type, so each converts through the converter
//! for its own shape. An empty sequence stays an empty array.

use docmap_core::{Result, Value};

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

/// Converter for `FieldType::Array`
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayConverter;

impl Converter for ArrayConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Array
    }

    fn mongoize(&self, cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::String(s) if s.is_empty() => Ok(Value::Null),
            Input::Sequence(items) => items
                .iter()
                .map(|item| cx.mongoize_natural(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            _ => Err(unsupported_input(FieldType::Array, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Array(_) => Ok(Input::from(stored.clone())),
            other => Err(unsupported_stored(FieldType::Array, other)),
        }
    }
}
