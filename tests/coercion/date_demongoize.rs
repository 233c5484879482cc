//! Date demongoize: stored instants back to calendar dates.

use crate::common::*;
use docmap::DateConverter;

#[test]
fn stored_instant_loads_as_date() {
    let coercer = coercer_in("UTC");
    let loaded = coercer
        .demongoize(&FieldType::Date, &Value::Timestamp(utc_midnight(2010, 1, 1)))
        .unwrap();
    assert_eq!(loaded, Input::Date(date(2010, 1, 1)));
}

#[test]
fn time_of_day_is_discarded() {
    let coercer = coercer_in("UTC");
    let loaded = coercer
        .demongoize(&FieldType::Date, &Value::Timestamp(utc(2010, 1, 1, 23, 59, 59)))
        .unwrap();
    assert_eq!(loaded.as_date(), Some(date(2010, 1, 1)));
}

#[test]
fn tokyo_round_trip_moves_back_one_day() {
    let coercer = coercer_in("Tokyo");
    let stored = coercer.mongoize(&FieldType::Date, date(2010, 1, 1)).unwrap();
    let loaded = coercer.demongoize(&FieldType::Date, &stored).unwrap();
    assert_eq!(loaded, Input::Date(date(2009, 12, 31)));
}

#[test]
fn utc_round_trip_is_lossless() {
    let coercer = coercer_in("UTC");
    for d in [date(1969, 7, 20), date(2000, 2, 29), date(2010, 1, 1), date(2038, 1, 19)] {
        let stored = coercer.mongoize(&FieldType::Date, d).unwrap();
        assert_eq!(coercer.demongoize(&FieldType::Date, &stored).unwrap(), Input::Date(d));
    }
}

#[test]
fn demongoize_ignores_the_policy() {
    let stored = Value::Timestamp(utc(2009, 12, 31, 15, 0, 0));
    for zone in ["UTC", "Tokyo", "America/Los_Angeles"] {
        let coercer = coercer_in(zone);
        assert_eq!(
            coercer.demongoize(&FieldType::Date, &stored).unwrap(),
            Input::Date(date(2009, 12, 31)),
            "{zone}"
        );
    }
}

#[test]
fn null_loads_as_null() {
    let coercer = coercer_in("UTC");
    assert_eq!(coercer.demongoize(&FieldType::Date, &Value::Null).unwrap(), Input::Null);
    assert_eq!(DateConverter::demongoize_timestamp(None), None);
}

#[test]
fn non_timestamp_is_unsupported() {
    let coercer = coercer_in("UTC");
    let err = coercer
        .demongoize(&FieldType::Date, &Value::String("2010-01-01".into()))
        .unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn pre_epoch_instant() {
    assert_eq!(
        DateConverter::demongoize_timestamp(Some(Timestamp::from_micros(-1))),
        Some(date(1969, 12, 31))
    );
}
