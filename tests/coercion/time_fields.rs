//! Time fields: instants, wall-clock strings, presentation zone.

use crate::common::*;

#[test]
fn naive_string_resolves_in_configured_zone() {
    let coercer = coercer_in("Tokyo");
    let stored = coercer.mongoize(&FieldType::Time, "2010-01-01 09:30:00").unwrap();
    assert_eq!(stored_timestamp(&stored), utc(2010, 1, 1, 0, 30, 0));
}

#[test]
fn offset_string_keeps_its_offset() {
    let coercer = coercer_in("Tokyo");
    let stored = coercer
        .mongoize(&FieldType::Time, "2010-01-01T00:00:00-05:00")
        .unwrap();
    assert_eq!(stored_timestamp(&stored), utc(2010, 1, 1, 5, 0, 0));
}

#[test]
fn time_demongoize_returns_the_instant() {
    let coercer = coercer_in("Tokyo");
    let ts = utc(2010, 1, 1, 5, 0, 0);
    assert_eq!(
        coercer.demongoize(&FieldType::Time, &Value::Timestamp(ts)).unwrap(),
        Input::Timestamp(ts)
    );
}

#[test]
fn localize_follows_use_utc() {
    let coercer = coercer_in("Tokyo");
    let ts = utc(2010, 1, 1, 0, 0, 0);

    let local = coercer.localize(ts);
    assert_eq!((local.date(), local.hour()), (date(2010, 1, 1), 9));

    coercer.policy().set_use_utc(true);
    let local = coercer.localize(ts);
    assert_eq!(local.zone(), ZoneId::Utc);
    assert_eq!(local.hour(), 0);
}

#[test]
fn subsecond_components() {
    let coercer = coercer_in("UTC");
    let stored = coercer
        .mongoize(
            &FieldType::Time,
            Input::Sequence(vec![
                Input::Int(2010),
                Input::Int(1),
                Input::Int(1),
                Input::Int(12),
                Input::Int(0),
                Input::Float(30.25),
            ]),
        )
        .unwrap();
    let ts = stored_timestamp(&stored);
    assert_eq!(ts.second(), 30);
    assert_eq!(ts.subsec_micros(), 250_000);
}

#[test]
fn too_many_components() {
    let coercer = coercer_in("UTC");
    let err = coercer
        .mongoize(&FieldType::Time, Input::sequence([2010, 1, 1, 0, 0, 0, 0, 0]))
        .unwrap_err();
    assert!(err.is_invalid_format());
}
