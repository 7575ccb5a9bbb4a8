//! Check settings
//!
//! Network and threshold settings, optionally loaded from a TOML file and then
//! overridden by command-line flags.

use crate::models::{PortPolicy, Thresholds, DEFAULT_CRIT_DAYS, DEFAULT_WARN_DAYS};
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// SSL/TLS settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslSettings {
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
    /// Accept any certificate the server presents; only the dates are read
    pub skip_trust_verification: bool,
    pub port_policy: PortPolicy,
}

impl Default for SslSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            handshake_timeout_secs: 10,
            skip_trust_verification: true,
            port_policy: PortPolicy::Fixed,
        }
    }
}

impl SslSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }

    /// Reject timeouts that would fail every connection on its first poll
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, secs) in [
            ("connect_timeout_secs", self.connect_timeout_secs),
            ("handshake_timeout_secs", self.handshake_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be at least 1 second".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Threshold settings, validated by [`ThresholdSettings::to_thresholds`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThresholdSettings {
    pub warn: u32,
    pub crit: u32,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            warn: DEFAULT_WARN_DAYS,
            crit: DEFAULT_CRIT_DAYS,
        }
    }
}

impl ThresholdSettings {
    pub fn to_thresholds(&self) -> Result<Thresholds, ConfigError> {
        Thresholds::new(self.warn, self.crit)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ssl: SslSettings,
    pub thresholds: ThresholdSettings,
}

impl Settings {
    /// Load settings from `path`, or the built-in defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
