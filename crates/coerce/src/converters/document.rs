//! Document converter
//!
//! Field values convert through the converter for their own shape.

use docmap_core::{Result, Value};
use std::collections::BTreeMap;

use super::{unsupported_input, unsupported_stored};
use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::{Context, Converter};

/// Converter for `FieldType::Document`
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentConverter;

impl Converter for DocumentConverter {
    fn field_type(&self) -> FieldType {
        FieldType::Document
    }

    fn mongoize(&self, cx: &Context<'_>, input: &Input) -> Result<Value> {
        match input {
            Input::Null => Ok(Value::Null),
            Input::String(s) if s.is_empty() => Ok(Value::Null),
            Input::Document(fields) => {
                let mut stored = BTreeMap::new();
                for (key, value) in fields {
                    stored.insert(key.clone(), cx.mongoize_natural(value)?);
                }
                Ok(Value::Object(stored))
            }
            _ => Err(unsupported_input(FieldType::Document, input)),
        }
    }

    fn demongoize(&self, _cx: &Context<'_>, stored: &Value) -> Result<Input> {
        match stored {
            Value::Null => Ok(Input::Null),
            Value::Object(_) => Ok(Input::from(stored.clone())),
            other => Err(unsupported_stored(FieldType::Document, other)),
        }
    }
}
