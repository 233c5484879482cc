//! docmap - field type coercion for a document store
//!
//! Converts application values to the store's wire values and back,
//! following each declared field type's rules. Dates are stored as the UTC
//! instant of midnight in a configurable time zone.
//!
//! # Quick Start
//!
//! ```
//! use docmap::{CalendarDate, Coercer, FieldType, Input};
//!
//! let coercer = Coercer::default();
//! coercer.policy().set_zone_name("UTC").unwrap();
//!
//! let stored = coercer.mongoize(&FieldType::Date, "1st Jan 2010").unwrap();
//! let loaded = coercer.demongoize(&FieldType::Date, &stored).unwrap();
//! assert_eq!(loaded, Input::Date(CalendarDate::new(2010, 1, 1).unwrap()));
//! ```
//!
//! # Architecture
//!
//! - `docmap-core`: wire values, timestamps, calendar dates, errors
//! - `docmap-coerce`: converters, registry, time zone policy, configuration

pub use docmap_coerce::*;
