//! Coercion configuration via `docmap.toml`
//!
//! Holds the settings the time zone policy is built from. Missing fields
//! take their defaults, so an empty file is a valid configuration.

use docmap_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::policy::PolicyState;
use crate::zone::ZoneId;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "docmap.toml";

/// Coercion configuration loaded from `docmap.toml`.
///
/// # Example
///
/// ```toml
/// use_zone_awareness = true
/// time_zone = "Tokyo"
/// use_utc = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionConfig {
    /// Resolve local times against `time_zone` (default: true).
    #[serde(default = "default_zone_awareness")]
    pub use_zone_awareness: bool,
    /// Zone name; absent means the system local zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Present loaded instants in UTC (default: false).
    #[serde(default)]
    pub use_utc: bool,
}

fn default_zone_awareness() -> bool {
    true
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            use_zone_awareness: default_zone_awareness(),
            time_zone: None,
            use_utc: false,
        }
    }
}

impl CoercionConfig {
    /// Parse the configured zone, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the zone name is unknown.
    pub fn zone(&self) -> Result<Option<ZoneId>> {
        self.time_zone.as_deref().map(ZoneId::parse).transpose()
    }

    /// Check every field that can be invalid.
    pub fn validate(&self) -> Result<()> {
        self.zone().map(|_| ())
    }

    /// The policy state this configuration describes.
    pub fn policy_state(&self) -> Result<PolicyState> {
        Ok(PolicyState {
            zone_aware: self.use_zone_awareness,
            zone: self.zone()?,
            use_utc: self.use_utc,
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docmap coercion configuration
#
# Resolve "local midnight" and naive times against time_zone (default: true).
# When false, the system local zone is always used.
use_zone_awareness = true

# Zone for local resolution: an IANA name ("Asia/Tokyo"), a friendly name
# ("Tokyo"), "UTC", or an offset ("+09:00"). Absent = system local zone.
# time_zone = "UTC"

# Present loaded instants in UTC instead of the active zone (default: false).
use_utc = false
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML or an unknown zone.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CoercionConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse config: {}", e)))?;
        // Validate the zone eagerly
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidConfig` if it
    /// cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(message) => {
                Error::invalid_config(format!("{} ({})", message, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
