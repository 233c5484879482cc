//! Time zone policy
//!
//! The single source of truth for how "local" wall-clock times are
//! resolved: against a configured zone, the system zone, or UTC.
//!
//! ## Sharing
//!
//! A `TimeZonePolicy` is created once and handed to the [`Coercer`] by
//! reference (`Arc<TimeZonePolicy>`). State lives behind a
//! `parking_lot::RwLock`, so a reader always sees one whole
//! [`PolicyState`], never a mix of two writes. Last write wins.
//!
//! Configure before concurrent use begins. [`PolicyOverride`] guards are
//! for single-threaded test setup and teardown.
//!
//! [`Coercer`]: crate::Coercer

use docmap_core::Result;
use parking_lot::RwLock;
use tracing::debug;

use crate::config::CoercionConfig;
use crate::zone::ZoneId;

/// A consistent copy of every policy field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyState {
    /// Resolve local times against `zone` instead of the system zone
    pub zone_aware: bool,
    /// Configured zone; `None` means the system local zone
    pub zone: Option<ZoneId>,
    /// Present loaded instants in UTC rather than the active zone
    pub use_utc: bool,
}

impl Default for PolicyState {
    fn default() -> Self {
        Self {
            zone_aware: true,
            zone: None,
            use_utc: false,
        }
    }
}

impl PolicyState {
    /// The zone local wall-clock times resolve in under this state
    ///
    /// The configured zone applies only while zone awareness is on;
    /// otherwise this is the system local zone.
    pub fn active_zone(&self) -> ZoneId {
        match (self.zone_aware, self.zone) {
            (true, Some(zone)) => zone,
            _ => ZoneId::Local,
        }
    }
}

/// Process configuration consulted by timezone-sensitive converters
#[derive(Debug, Default)]
pub struct TimeZonePolicy {
    state: RwLock<PolicyState>,
}

impl TimeZonePolicy {
    /// Policy with zone awareness on and no configured zone
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy with the given state
    pub fn with_state(state: PolicyState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Build a policy from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configured zone name is unknown.
    pub fn from_config(config: &CoercionConfig) -> Result<Self> {
        Ok(Self::with_state(config.policy_state()?))
    }

    /// Whether the configured zone is honored
    pub fn is_zone_awareness_enabled(&self) -> bool {
        self.state.read().zone_aware
    }

    /// The zone local wall-clock times currently resolve in
    pub fn active_zone(&self) -> ZoneId {
        self.state.read().active_zone()
    }

    /// The configured zone, whether or not awareness is on
    pub fn configured_zone(&self) -> Option<ZoneId> {
        self.state.read().zone
    }

    /// Whether loaded instants are presented in UTC
    pub fn use_utc(&self) -> bool {
        self.state.read().use_utc
    }

    /// Copy of the whole state, read under one lock
    pub fn snapshot(&self) -> PolicyState {
        *self.state.read()
    }

    /// Turn zone awareness on or off
    pub fn set_zone_awareness(&self, enabled: bool) {
        self.state.write().zone_aware = enabled;
        debug!(enabled, "Zone awareness changed");
    }

    /// Set or clear the configured zone
    pub fn set_zone(&self, zone: Option<ZoneId>) {
        self.state.write().zone = zone;
        debug!(zone = ?zone.map(|z| z.name()), "Configured zone changed");
    }

    /// Parse and set the configured zone
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` and leaves the policy unchanged if the
    /// name is unknown.
    pub fn set_zone_name(&self, name: &str) -> Result<()> {
        let zone = ZoneId::parse(name)?;
        self.set_zone(Some(zone));
        Ok(())
    }

    /// Present loaded instants in UTC (true) or the active zone (false)
    pub fn set_use_utc(&self, use_utc: bool) {
        self.state.write().use_utc = use_utc;
        debug!(use_utc, "UTC presentation changed");
    }

    /// Replace the whole state until the returned guard drops
    pub fn override_with(&self, state: PolicyState) -> PolicyOverride<'_> {
        let previous = std::mem::replace(&mut *self.state.write(), state);
        debug!(?state, "Policy override installed");
        PolicyOverride {
            policy: self,
            previous,
        }
    }

    /// Edit a copy of the current state and install it until the guard drops
    ///
    /// ```
    /// use docmap_coerce::{TimeZonePolicy, ZoneId};
    ///
    /// let policy = TimeZonePolicy::new();
    /// {
    ///     let _guard = policy.scoped(|state| {
    ///         state.zone = Some(ZoneId::parse("Tokyo").unwrap());
    ///     });
    ///     assert_eq!(policy.active_zone().name(), "Asia/Tokyo");
    /// }
    /// assert_eq!(policy.active_zone(), ZoneId::Local);
    /// ```
    pub fn scoped(&self, edit: impl FnOnce(&mut PolicyState)) -> PolicyOverride<'_> {
        let mut state = self.snapshot();
        edit(&mut state);
        self.override_with(state)
    }
}

/// Restores the previous policy state on drop
#[must_use = "the override is undone as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PolicyOverride<'a> {
    policy: &'a TimeZonePolicy,
    previous: PolicyState,
}

impl Drop for PolicyOverride<'_> {
    fn drop(&mut self) {
        *self.policy.state.write() = self.previous;
        debug!(state = ?self.previous, "Policy override restored");
    }
}
