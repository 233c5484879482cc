//! Non-temporal fields through the facade.

use crate::common::*;
use std::collections::BTreeMap;

#[test]
fn null_is_null_for_every_builtin() {
    let coercer = coercer_in("UTC");
    for field_type in FieldType::BUILTIN.iter() {
        assert_eq!(coercer.mongoize(field_type, Input::Null).unwrap(), Value::Null, "{field_type}");
        assert_eq!(coercer.demongoize(field_type, &Value::Null).unwrap(), Input::Null, "{field_type}");
    }
}

#[test]
fn empty_string_is_null_for_every_builtin() {
    let coercer = coercer_in("UTC");
    for field_type in FieldType::BUILTIN.iter() {
        assert_eq!(coercer.mongoize(field_type, "").unwrap(), Value::Null, "{field_type}");
    }
}

#[test]
fn string_field() {
    let coercer = coercer_in("UTC");
    assert_eq!(coercer.mongoize(&FieldType::String, "hi").unwrap(), Value::from("hi"));
    assert_eq!(coercer.mongoize(&FieldType::String, 12).unwrap(), Value::from("12"));
    assert_eq!(
        coercer.mongoize(&FieldType::String, date(2010, 1, 1)).unwrap(),
        Value::from("2010-01-01")
    );
}

#[test]
fn numeric_fields() {
    let coercer = coercer_in("UTC");
    assert_eq!(coercer.mongoize(&FieldType::Integer, "7").unwrap(), Value::Int(7));
    assert_eq!(coercer.mongoize(&FieldType::Integer, 7.9).unwrap(), Value::Int(7));
    assert_eq!(coercer.mongoize(&FieldType::Float, 7).unwrap(), Value::Float(7.0));
    assert!(coercer
        .mongoize(&FieldType::Integer, "seven")
        .unwrap_err()
        .is_invalid_format());
}

#[test]
fn boolean_field() {
    let coercer = coercer_in("UTC");
    assert_eq!(coercer.mongoize(&FieldType::Boolean, "yes").unwrap(), Value::Bool(true));
    assert_eq!(coercer.mongoize(&FieldType::Boolean, 0).unwrap(), Value::Bool(false));
    assert!(coercer
        .mongoize(&FieldType::Boolean, "perhaps")
        .unwrap_err()
        .is_invalid_format());
}

#[test]
fn array_elements_follow_the_policy() {
    let coercer = coercer_in("Tokyo");
    let input = Input::Sequence(vec![Input::Date(date(2010, 1, 1)), Input::from("x")]);
    assert_eq!(
        coercer.mongoize(&FieldType::Array, input).unwrap(),
        Value::Array(vec![
            Value::Timestamp(utc(2009, 12, 31, 15, 0, 0)),
            Value::from("x"),
        ])
    );
}

#[test]
fn document_round_trip() {
    let coercer = coercer_in("UTC");
    let mut fields = BTreeMap::new();
    fields.insert("count".to_string(), Input::Int(3));
    fields.insert("flag".to_string(), Input::Bool(true));

    let stored = coercer
        .mongoize(&FieldType::Document, Input::Document(fields.clone()))
        .unwrap();
    assert_eq!(
        coercer.demongoize(&FieldType::Document, &stored).unwrap(),
        Input::Document(fields)
    );
}

#[test]
fn binary_field() {
    let coercer = coercer_in("UTC");
    assert_eq!(
        coercer.mongoize(&FieldType::Binary, vec![0u8, 255]).unwrap(),
        Value::Bytes(vec![0, 255])
    );
}

#[test]
fn natural_conversion_uses_value_shape() {
    let coercer = coercer_in("UTC");
    assert_eq!(
        coercer.mongoize_natural(date(2010, 1, 1)).unwrap(),
        Value::Timestamp(utc_midnight(2010, 1, 1))
    );
    assert_eq!(coercer.mongoize_natural(true).unwrap(), Value::Bool(true));
}
