//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Once};

pub use docmap::{
    CalendarDate, Coercer, CoercionConfig, Error, FieldType, Input, LocalTimestamp, PolicyState,
    Timestamp, TimeZonePolicy, Value, ZoneId,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness capture.
///
/// Set `DOCMAP_LOG=docmap_coerce=trace` to see per-conversion events.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("DOCMAP_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Builders
// ============================================================================

/// A calendar date; panics on impossible dates.
pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid test date")
}

/// A UTC instant from calendar and clock components.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
    Timestamp::from_components(year, month, day, hour, minute, second, 0)
        .expect("valid test instant")
}

/// UTC midnight of a date.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Timestamp {
    utc(year, month, day, 0, 0, 0)
}

/// Policy with zone awareness on and the given zone configured.
pub fn policy_in(zone: &str) -> Arc<TimeZonePolicy> {
    let policy = TimeZonePolicy::new();
    policy.set_zone_name(zone).expect("known test zone");
    Arc::new(policy)
}

/// Coercer whose policy resolves local times in `zone`.
pub fn coercer_in(zone: &str) -> Coercer {
    init_tracing();
    Coercer::new(policy_in(zone))
}

/// Midnight of `date` in the process local zone, as a UTC instant.
pub fn system_midnight(date: CalendarDate) -> Timestamp {
    use chrono::{Local, TimeZone};
    let wall = date.naive().and_hms_opt(0, 0, 0).expect("midnight");
    let local = Local
        .from_local_datetime(&wall)
        .earliest()
        .expect("midnight exists in the system zone");
    Timestamp::from_datetime(&local)
}

/// Unwrap a stored timestamp.
pub fn stored_timestamp(value: &Value) -> Timestamp {
    value
        .as_timestamp()
        .unwrap_or_else(|| panic!("expected a stored timestamp, got {:?}", value))
}
