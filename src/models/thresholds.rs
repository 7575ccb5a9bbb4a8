//! Expiry thresholds

use crate::utils::ConfigError;

pub const DEFAULT_WARN_DAYS: u32 = 15;
pub const DEFAULT_CRIT_DAYS: u32 = 7;

/// Warning and critical day counts.
///
/// `crit` must not exceed `warn`; an inverted pair would leave the warning
/// band empty or unreachable, so it is rejected when the thresholds are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    warn: u32,
    crit: u32,
}

impl Thresholds {
    pub fn new(warn: u32, crit: u32) -> Result<Self, ConfigError> {
        if crit > warn {
            return Err(ConfigError::InvalidValue {
                key: "crit".to_string(),
                message: format!(
                    "critical threshold ({} days) must not exceed warning threshold ({} days)",
                    crit, warn
                ),
            });
        }
        Ok(Self { warn, crit })
    }

    pub fn warn(&self) -> u32 {
        self.warn
    }

    pub fn crit(&self) -> u32 {
        self.crit
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn: DEFAULT_WARN_DAYS,
            crit: DEFAULT_CRIT_DAYS,
        }
    }
}
