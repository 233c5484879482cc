//! Time zone policy: awareness toggle, overrides, sharing across threads.

use crate::common::*;
use docmap::DateConverter;
use std::sync::Arc;
use std::thread;

#[test]
fn awareness_off_uses_system_zone() {
    let policy = policy_in("Tokyo");
    policy.set_zone_awareness(false);

    let local = DateConverter::to_local_timestamp(&policy, date(2010, 1, 1));
    assert_eq!(local.zone(), ZoneId::Local);
    assert_eq!(local.to_utc(), system_midnight(date(2010, 1, 1)));
}

#[test]
fn awareness_on_without_zone_uses_system_zone() {
    init_tracing();
    let policy = TimeZonePolicy::new();
    let local = DateConverter::to_local_timestamp(&policy, date(2010, 6, 1));
    assert_eq!(local.to_utc(), system_midnight(date(2010, 6, 1)));
}

#[test]
fn toggling_awareness_changes_stored_value() {
    let coercer = coercer_in("UTC");
    let d = date(2010, 1, 1);

    let aware = coercer.mongoize(&FieldType::Date, d).unwrap();
    coercer.policy().set_zone_awareness(false);
    let unaware = coercer.mongoize(&FieldType::Date, d).unwrap();

    assert_eq!(aware, Value::Timestamp(utc_midnight(2010, 1, 1)));
    assert_eq!(unaware, Value::Timestamp(system_midnight(d)));
}

#[test]
fn scoped_override_restores_previous_state() {
    let coercer = coercer_in("UTC");
    let d = date(2010, 1, 1);
    {
        let _guard = coercer.policy().scoped(|state| {
            state.zone = Some(ZoneId::Named(chrono_tz::Asia::Tokyo));
        });
        assert_eq!(
            stored_timestamp(&coercer.mongoize(&FieldType::Date, d).unwrap()),
            utc(2009, 12, 31, 15, 0, 0)
        );
    }
    assert_eq!(
        coercer.mongoize(&FieldType::Date, d).unwrap(),
        Value::Timestamp(utc_midnight(2010, 1, 1))
    );
}

#[test]
fn override_with_replaces_whole_state() {
    let policy = policy_in("Tokyo");
    let before = policy.snapshot();
    {
        let _guard = policy.override_with(PolicyState {
            zone_aware: false,
            zone: None,
            use_utc: true,
        });
        assert!(!policy.is_zone_awareness_enabled());
        assert!(policy.use_utc());
    }
    assert_eq!(policy.snapshot(), before);
}

#[test]
fn unknown_zone_leaves_policy_unchanged() {
    let policy = policy_in("Tokyo");
    let err = policy.set_zone_name("Nowhere/Special").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert_eq!(policy.active_zone().name(), "Asia/Tokyo");
}

#[test]
fn friendly_alias_resolves_to_tz_database_zone() {
    let policy = policy_in("Tokyo");
    assert_eq!(policy.active_zone(), ZoneId::Named(chrono_tz::Asia::Tokyo));

    policy.set_zone(Some(ZoneId::Named(chrono_tz::America::New_York)));
    let local = DateConverter::to_local_timestamp(&policy, date(2010, 1, 1));
    assert_eq!(local.to_utc(), utc(2010, 1, 1, 5, 0, 0));
}

#[test]
fn fixed_offset_zone() {
    let coercer = coercer_in("+05:30");
    let stored = coercer.mongoize(&FieldType::Date, date(2010, 1, 1)).unwrap();
    assert_eq!(stored_timestamp(&stored), utc(2009, 12, 31, 18, 30, 0));
}

#[test]
fn dst_gap_midnight_moves_forward() {
    // Sao Paulo clocks jumped from 00:00 to 01:00 on 2018-11-04
    let coercer = coercer_in("America/Sao_Paulo");
    let stored = coercer.mongoize(&FieldType::Date, date(2018, 11, 4)).unwrap();
    assert_eq!(stored_timestamp(&stored), utc(2018, 11, 4, 3, 0, 0));
}

#[test]
fn shared_policy_across_threads() {
    const NINE_HOURS_MICROS: i64 = 9 * 3600 * 1_000_000;
    let policy = policy_in("Tokyo");
    let coercer = Arc::new(Coercer::new(Arc::clone(&policy)));

    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let coercer = Arc::clone(&coercer);
            thread::spawn(move || {
                let stored = coercer.mongoize(&FieldType::Date, date(2010, 1, 1 + i)).unwrap();
                (i, stored_timestamp(&stored))
            })
        })
        .collect();

    for handle in handles {
        let (i, ts) = handle.join().unwrap();
        let expected = utc_midnight(2010, 1, 1 + i).as_micros() - NINE_HOURS_MICROS;
        assert_eq!(ts, Timestamp::from_micros(expected));
    }
}
