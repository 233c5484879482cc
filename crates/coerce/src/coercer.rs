//! Coercion facade
//!
//! [`Coercer`] owns a registry and shares a policy. It is the entry point
//! for callers that map document fields by declared type.
//!
//! ```
//! use docmap_coerce::{CalendarDate, Coercer, FieldType, Input, Value};
//!
//! let coercer = Coercer::default();
//! coercer.policy().set_zone_name("UTC").unwrap();
//!
//! let stored = coercer.mongoize(&FieldType::Date, "2010-01-01").unwrap();
//! assert!(matches!(stored, Value::Timestamp(_)));
//!
//! let loaded = coercer.demongoize(&FieldType::Date, &stored).unwrap();
//! assert_eq!(loaded, Input::Date(CalendarDate::new(2010, 1, 1).unwrap()));
//! ```

use docmap_core::{Result, Timestamp, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::CoercionConfig;
use crate::converters::TimeConverter;
use crate::field_type::FieldType;
use crate::input::Input;
use crate::policy::TimeZonePolicy;
use crate::registry::{Context, TypeRegistry};
use crate::zone::LocalTimestamp;

/// Converts values by declared field type
#[derive(Debug, Clone)]
pub struct Coercer {
    registry: TypeRegistry,
    policy: Arc<TimeZonePolicy>,
}

impl Default for Coercer {
    fn default() -> Self {
        Self::new(Arc::new(TimeZonePolicy::new()))
    }
}

impl Coercer {
    /// Built-in converters with a shared policy
    pub fn new(policy: Arc<TimeZonePolicy>) -> Self {
        Self::with_registry(TypeRegistry::with_defaults(), policy)
    }

    /// Custom registry with a shared policy
    pub fn with_registry(registry: TypeRegistry, policy: Arc<TimeZonePolicy>) -> Self {
        Self { registry, policy }
    }

    /// Built-in converters with a policy built from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configured zone is unknown.
    pub fn from_config(config: &CoercionConfig) -> Result<Self> {
        let policy = TimeZonePolicy::from_config(config)?;
        info!(
            zone_aware = config.use_zone_awareness,
            zone = ?config.time_zone,
            use_utc = config.use_utc,
            "Coercer configured"
        );
        Ok(Self::new(Arc::new(policy)))
    }

    /// Load configuration from a file and build a coercer from it
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not
    /// parse or names an unknown zone.
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = CoercionConfig::from_file(config_path)?;
        Self::from_config(&config)
    }

    /// The shared time zone policy
    pub fn policy(&self) -> &Arc<TimeZonePolicy> {
        &self.policy
    }

    /// The converter registry
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Mutable access for registering custom converters
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Context for calling converters directly
    pub fn context(&self) -> Context<'_> {
        Context::new(&self.registry, &self.policy)
    }

    /// Convert an application value to its wire form
    ///
    /// # Errors
    ///
    /// `UnsupportedType` if no converter is registered for `field_type` or
    /// it has no rule for the input's shape. `InvalidFormat` if the input
    /// cannot be converted.
    pub fn mongoize(&self, field_type: &FieldType, input: impl Into<Input>) -> Result<Value> {
        self.context().mongoize_as(field_type, &input.into())
    }

    /// Convert a stored wire value to an application value
    ///
    /// # Errors
    ///
    /// `UnsupportedType` if no converter is registered for `field_type` or
    /// the stored value has the wrong shape.
    pub fn demongoize(&self, field_type: &FieldType, stored: &Value) -> Result<Input> {
        self.context().demongoize_as(field_type, stored)
    }

    /// Convert a value through the converter for its own shape
    ///
    /// # Errors
    ///
    /// As [`Coercer::mongoize`].
    pub fn mongoize_natural(&self, input: impl Into<Input>) -> Result<Value> {
        self.context().mongoize_natural(&input.into())
    }

    /// Resolve a value to an instant in the active zone
    ///
    /// # Errors
    ///
    /// `UnsupportedType` for non-temporal field types.
    pub fn mongoize_time(
        &self,
        field_type: &FieldType,
        input: impl Into<Input>,
    ) -> Result<Option<LocalTimestamp>> {
        let cx = self.context();
        cx.registry()
            .resolve_serializer(field_type)?
            .mongoize_time(&cx, &input.into())
    }

    /// Express a stored instant for presentation under the current policy
    pub fn localize(&self, ts: Timestamp) -> LocalTimestamp {
        TimeConverter::localize(&self.policy, ts)
    }
}
