//! Type coercion between application values and store wire values
//!
//! This crate implements the per-type conversion rules:
//! - `mongoize`: application value to the form written to the store
//! - `demongoize`: stored value back to the application type
//! - `mongoize_time`: application value to an instant in the active zone
//!
//! # Architecture
//!
//! Converters are registered per [`FieldType`] in a [`TypeRegistry`].
//! Timezone-sensitive converters read a shared [`TimeZonePolicy`], which
//! is configured once (usually from `docmap.toml`) and handed in by `Arc`.
//! [`Coercer`] ties the two together.
//!
//! ```
//! use docmap_coerce::{CalendarDate, Coercer, CoercionConfig, FieldType, Value, Timestamp};
//!
//! let config = CoercionConfig::from_toml_str("time_zone = \"Tokyo\"").unwrap();
//! let coercer = Coercer::from_config(&config).unwrap();
//!
//! let date = CalendarDate::new(2010, 1, 1).unwrap();
//! let stored = coercer.mongoize(&FieldType::Date, date).unwrap();
//! assert_eq!(
//!     stored,
//!     Value::Timestamp(Timestamp::from_components(2009, 12, 31, 15, 0, 0, 0).unwrap())
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coercer;
pub mod config;
pub mod converters;
pub mod field_type;
pub mod input;
pub mod parse;
pub mod policy;
pub mod registry;
pub mod zone;

pub use coercer::Coercer;
pub use config::{CoercionConfig, CONFIG_FILE_NAME};
pub use converters::{
    timestamp_from_components, ArrayConverter, BinaryConverter, BooleanConverter, DateConverter,
    DateMongoize, DocumentConverter, FloatConverter, IntegerConverter, StringConverter,
    TimeConverter, MAX_TIME_COMPONENTS,
};
pub use field_type::FieldType;
pub use input::Input;
pub use parse::{parse_date, parse_time, ParsedTime};
pub use policy::{PolicyOverride, PolicyState, TimeZonePolicy};
pub use registry::{Context, Converter, TypeRegistry};
pub use zone::{LocalTimestamp, ZoneId};

pub use docmap_core::{CalendarDate, Error, Result, Timestamp, Value};
