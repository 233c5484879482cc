//! Built-in converters
//!
//! One converter per built-in [`FieldType`]. Temporal converters (`Date`,
//! `Time`) consult the time zone policy; the rest are zone-independent.
//!
//! Shared rules:
//! - `Null` mongoizes and demongoizes to null under every type
//! - An empty string mongoizes to null under every type
//! - Input with no coercion rule fails with `UnsupportedType`
//! - Input of an accepted type that cannot be converted fails with
//!   `InvalidFormat`

mod array;
mod binary;
mod boolean;
mod date;
mod document;
mod float;
mod integer;
mod string;
mod time;

pub use array::ArrayConverter;
pub use binary::BinaryConverter;
pub use boolean::BooleanConverter;
pub use date::{DateConverter, DateMongoize};
pub use document::DocumentConverter;
pub use float::FloatConverter;
pub use integer::IntegerConverter;
pub use string::StringConverter;
pub use time::{timestamp_from_components, TimeConverter, MAX_TIME_COMPONENTS};

use docmap_core::{Error, Value};

use crate::field_type::FieldType;
use crate::input::Input;
use crate::registry::TypeRegistry;

/// Register every built-in converter
pub(crate) fn register_builtin(registry: &mut TypeRegistry) {
    registry
        .register(DateConverter)
        .register(TimeConverter)
        .register(StringConverter)
        .register(IntegerConverter)
        .register(FloatConverter)
        .register(BooleanConverter)
        .register(ArrayConverter)
        .register(BinaryConverter)
        .register(DocumentConverter);
}

/// `UnsupportedType` for an application value
pub(crate) fn unsupported_input(target: FieldType, input: &Input) -> Error {
    Error::unsupported_type(target.name(), input.type_name())
}

/// `UnsupportedType` for a stored wire value
pub(crate) fn unsupported_stored(target: FieldType, stored: &Value) -> Error {
    Error::unsupported_type(target.name(), stored.type_name())
}

/// Report a delegated conversion failure under the caller's type name
pub(crate) fn retarget(err: Error, to: FieldType) -> Error {
    match err {
        Error::InvalidFormat { input, reason, .. } => Error::InvalidFormat {
            target: to.name().to_string(),
            input,
            reason,
        },
        Error::UnsupportedType { actual, .. } => Error::UnsupportedType {
            target: to.name().to_string(),
            actual,
        },
        other => other,
    }
}
