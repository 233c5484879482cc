//! Date mongoize: every accepted input shape, under UTC and Tokyo.

use crate::common::*;
use docmap::{DateConverter, DateMongoize};

// ============================================================================
// Dates
// ============================================================================

#[test]
fn date_in_utc_is_utc_midnight() {
    let coercer = coercer_in("UTC");
    let stored = coercer.mongoize(&FieldType::Date, date(2010, 1, 1)).unwrap();
    assert_eq!(stored, Value::Timestamp(utc_midnight(2010, 1, 1)));
}

#[test]
fn date_in_tokyo_is_previous_utc_afternoon() {
    let coercer = coercer_in("Tokyo");
    let stored = coercer.mongoize(&FieldType::Date, date(2010, 1, 1)).unwrap();
    assert_eq!(stored_timestamp(&stored), utc(2009, 12, 31, 15, 0, 0));
}

#[test]
fn to_local_timestamp_in_tokyo() {
    let policy = policy_in("Tokyo");
    let local = DateConverter::to_local_timestamp(&policy, date(2010, 1, 1));

    assert_eq!(local.zone(), ZoneId::parse("Asia/Tokyo").unwrap());
    assert_eq!(local.offset_seconds(), 9 * 3600);
    assert_eq!(local.date(), date(2010, 1, 1));
    assert_eq!(local.to_utc(), utc(2009, 12, 31, 15, 0, 0));
}

#[test]
fn instance_mongoize_matches_static_form() {
    let coercer = coercer_in("America/New_York");
    let d = date(2010, 7, 4);

    let stored = coercer.mongoize(&FieldType::Date, d).unwrap();
    assert_eq!(stored, Value::Timestamp(d.mongoize(coercer.policy())));
    assert_eq!(stored_timestamp(&stored), utc(2010, 7, 4, 4, 0, 0));
}

#[test]
fn instance_mongoize_time_is_local_midnight() {
    let coercer = coercer_in("Tokyo");
    let local = date(2010, 1, 1).mongoize_time(coercer.policy());
    assert_eq!((local.hour(), local.minute(), local.second()), (0, 0, 0));
    assert_eq!(local.subsec_micros(), 0);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn string_parses_as_the_same_date() {
    let coercer = coercer_in("UTC");
    let from_string = coercer.mongoize(&FieldType::Date, "1st Jan 2010").unwrap();
    let from_date = coercer.mongoize(&FieldType::Date, date(2010, 1, 1)).unwrap();
    assert_eq!(from_string, from_date);
}

#[test]
fn string_in_tokyo_matches_date_in_tokyo() {
    let coercer = coercer_in("Tokyo");
    for text in ["2010-01-01", "2010/01/01", "Jan 1, 2010", "Friday, 1 January 2010"] {
        assert_eq!(
            stored_timestamp(&coercer.mongoize(&FieldType::Date, text).unwrap()),
            utc(2009, 12, 31, 15, 0, 0),
            "{text}"
        );
    }
}

#[test]
fn string_time_of_day_is_dropped() {
    let coercer = coercer_in("UTC");
    let stored = coercer
        .mongoize(&FieldType::Date, "2010-01-01T18:30:00Z")
        .unwrap();
    assert_eq!(stored, Value::Timestamp(utc_midnight(2010, 1, 1)));
}

#[test]
fn blank_inputs_store_null() {
    let coercer = coercer_in("Tokyo");
    assert_eq!(coercer.mongoize(&FieldType::Date, Input::Null).unwrap(), Value::Null);
    assert_eq!(coercer.mongoize(&FieldType::Date, "").unwrap(), Value::Null);
    assert_eq!(coercer.mongoize(&FieldType::Date, "   ").unwrap(), Value::Null);
    assert_eq!(
        coercer.mongoize(&FieldType::Date, Input::Sequence(vec![])).unwrap(),
        Value::Null
    );
}

#[test]
fn malformed_string_is_invalid_format() {
    let coercer = coercer_in("UTC");
    for bad in ["not a date", "2010-02-30", "01/02/2010", "Jan 2010"] {
        let err = coercer.mongoize(&FieldType::Date, bad).unwrap_err();
        match err {
            Error::InvalidFormat { ref target, .. } => assert_eq!(target, "Date", "{bad}"),
            other => panic!("Expected InvalidFormat for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn trailing_text_after_time_is_invalid_format() {
    let coercer = coercer_in("UTC");
    for bad in [
        "2010-01-01T99:99 this is not a time",
        "2010-01-01 10:00garbage!!",
        "1 Jan 2010 12:34 lorem ipsum",
        "2010-01-01T25:00",
    ] {
        let err = coercer.mongoize(&FieldType::Date, bad).unwrap_err();
        assert!(err.is_invalid_format(), "{bad}");
    }
}

// ============================================================================
// Numbers and sequences
// ============================================================================

#[test]
fn epoch_seconds_are_utc_regardless_of_zone() {
    let coercer = coercer_in("Tokyo");
    let expected = Value::Timestamp(utc_midnight(2010, 1, 1));
    assert_eq!(coercer.mongoize(&FieldType::Date, 1_262_304_000i64).unwrap(), expected);
    assert_eq!(coercer.mongoize(&FieldType::Date, 1_262_304_000.0).unwrap(), expected);
}

#[test]
fn component_sequence_is_utc() {
    let coercer = coercer_in("Tokyo");
    let stored = coercer
        .mongoize(&FieldType::Date, Input::sequence([2010, 1, 1, 0, 0, 0, 0]))
        .unwrap();
    assert_eq!(stored, Value::Timestamp(utc_midnight(2010, 1, 1)));
}

#[test]
fn short_component_sequence_uses_defaults() {
    let coercer = coercer_in("UTC");
    let stored = coercer
        .mongoize(&FieldType::Date, Input::sequence([2010, 3]))
        .unwrap();
    assert_eq!(stored, Value::Timestamp(utc_midnight(2010, 3, 1)));
}

#[test]
fn bad_component_sequence_reports_date() {
    let coercer = coercer_in("UTC");
    let err = coercer
        .mongoize(&FieldType::Date, Input::sequence([2010, 13, 1]))
        .unwrap_err();
    match err {
        Error::InvalidFormat { target, .. } => assert_eq!(target, "Date"),
        other => panic!("Expected InvalidFormat, got {other:?}"),
    }
}

// ============================================================================
// Other shapes
// ============================================================================

#[test]
fn timestamp_passes_through() {
    let coercer = coercer_in("Tokyo");
    let ts = utc(2010, 1, 1, 12, 34, 56);
    assert_eq!(
        coercer.mongoize(&FieldType::Date, ts).unwrap(),
        Value::Timestamp(ts)
    );
}

#[test]
fn unsupported_shapes() {
    let coercer = coercer_in("UTC");
    for input in [Input::Bool(true), Input::Bytes(vec![1, 2]), Input::Document(Default::default())] {
        let err = coercer.mongoize(&FieldType::Date, input.clone()).unwrap_err();
        assert!(err.is_unsupported_type(), "{input:?}");
        assert!(err.to_string().contains(input.type_name()));
    }
}
