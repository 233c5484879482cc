//! Coercion Integration Tests
//!
//! Field conversions through the public `Coercer` API, under different
//! time zone policies.

#[path = "../common/mod.rs"]
mod common;

mod date_demongoize;
mod date_mongoize;
mod scalar_fields;
mod time_fields;
mod time_zone_policy;
