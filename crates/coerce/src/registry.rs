//! Type registry
//!
//! Maps each field type to the converter that implements its canonical
//! operations. Lookup is pure; the registry is built once and then only
//! read.
//!
//! ## The canonical operations
//!
//! Every registered [`Converter`] provides:
//! 1. `mongoize`: application value to wire value (null in, null out)
//! 2. `demongoize`: wire value to application value
//! 3. `mongoize_time`: application value to a zone-relative instant
//!    (temporal types only; the default rejects every input)
//!
//! The instance-level form is an extension trait on the application type
//! (see [`DateMongoize`](crate::converters::DateMongoize)).

use docmap_core::{Error, Result, Value};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::converters;
use crate::field_type::FieldType;
use crate::input::Input;
use crate::policy::TimeZonePolicy;
use crate::zone::LocalTimestamp;

/// Per-type conversion logic
///
/// Implementations are stateless. Everything they need beyond their input
/// (the policy, other converters) comes through the [`Context`].
pub trait Converter: Send + Sync + fmt::Debug {
    /// The field type this converter is registered under
    fn field_type(&self) -> FieldType;

    /// Convert an application value to its wire form
    fn mongoize(&self, cx: &Context<'_>, input: &Input) -> Result<Value>;

    /// Convert a stored wire value back to an application value
    fn demongoize(&self, cx: &Context<'_>, stored: &Value) -> Result<Input>;

    /// Resolve an application value to an instant in the active zone
    ///
    /// `Ok(None)` for blank input. Non-temporal types reject everything.
    fn mongoize_time(&self, _cx: &Context<'_>, input: &Input) -> Result<Option<LocalTimestamp>> {
        Err(Error::unsupported_type(
            format!("{} time", self.field_type()),
            input.type_name(),
        ))
    }
}

/// Everything a converter may consult during one call
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    registry: &'a TypeRegistry,
    policy: &'a TimeZonePolicy,
}

impl<'a> Context<'a> {
    /// Bundle a registry and a policy
    pub fn new(registry: &'a TypeRegistry, policy: &'a TimeZonePolicy) -> Self {
        Self { registry, policy }
    }

    /// The registry converters delegate through
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// The time zone policy
    pub fn policy(&self) -> &'a TimeZonePolicy {
        self.policy
    }

    /// Mongoize `input` as `field_type`
    pub fn mongoize_as(&self, field_type: &FieldType, input: &Input) -> Result<Value> {
        trace!(%field_type, input = input.type_name(), "mongoize");
        self.registry.resolve_serializer(field_type)?.mongoize(self, input)
    }

    /// Demongoize `stored` as `field_type`
    pub fn demongoize_as(&self, field_type: &FieldType, stored: &Value) -> Result<Input> {
        trace!(%field_type, stored = stored.type_name(), "demongoize");
        self.registry.resolve_deserializer(field_type)?.demongoize(self, stored)
    }

    /// Mongoize `input` through the converter for its own type
    ///
    /// Used for elements of arrays and documents, which carry no declared
    /// type of their own.
    pub fn mongoize_natural(&self, input: &Input) -> Result<Value> {
        match input.natural_type() {
            Some(field_type) => self.mongoize_as(&field_type, input),
            None => Ok(Value::Null),
        }
    }
}

/// Registry of converters keyed by field type
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    converters: FxHashMap<FieldType, Arc<dyn Converter>>,
}

impl TypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in converter
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        converters::register_builtin(&mut registry);
        registry
    }

    /// Register a converter under its field type
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) -> &mut Self {
        self.register_shared(Arc::new(converter))
    }

    /// Register a shared converter under its field type
    pub fn register_shared(&mut self, converter: Arc<dyn Converter>) -> &mut Self {
        let field_type = converter.field_type();
        if self.converters.insert(field_type.clone(), converter).is_some() {
            debug!(%field_type, "Replaced converter");
        } else {
            debug!(%field_type, "Registered converter");
        }
        self
    }

    /// Converter used to mongoize values declared as `field_type`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` if nothing is registered for the type.
    pub fn resolve_serializer(&self, field_type: &FieldType) -> Result<&dyn Converter> {
        self.lookup(field_type)
    }

    /// Converter used to demongoize values declared as `field_type`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` if nothing is registered for the type.
    pub fn resolve_deserializer(&self, field_type: &FieldType) -> Result<&dyn Converter> {
        self.lookup(field_type)
    }

    fn lookup(&self, field_type: &FieldType) -> Result<&dyn Converter> {
        self.converters
            .get(field_type)
            .map(|converter| converter.as_ref())
            .ok_or_else(|| Error::unsupported_type(field_type.name(), "any input"))
    }

    /// Whether a converter is registered for the type
    pub fn contains(&self, field_type: &FieldType) -> bool {
        self.converters.contains_key(field_type)
    }

    /// Registered field types, sorted
    pub fn field_types(&self) -> Vec<FieldType> {
        let mut types: Vec<FieldType> = self.converters.keys().cloned().collect();
        types.sort();
        types
    }

    /// Number of registered converters
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
