//! Check pipeline
//!
//! Threads one explicit configuration through normalize, fetch, evaluate and
//! classify. Any stage failure becomes an UNKNOWN result carrying the error
//! text.

use crate::checks::{classify, normalize_with, CertificateChecker, SslChecker};
use crate::config::{Settings, SslSettings};
use crate::models::{CheckResult, Thresholds};
use crate::utils::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Everything a single check run needs
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub host: String,
    pub thresholds: Thresholds,
    pub ssl: SslSettings,
}

impl CheckConfig {
    pub fn new(host: impl Into<String>, thresholds: Thresholds, ssl: SslSettings) -> Self {
        Self {
            host: host.into(),
            thresholds,
            ssl,
        }
    }

    /// Build a config from file settings, validating timeouts and thresholds
    pub fn from_settings(host: impl Into<String>, settings: &Settings) -> Result<Self> {
        settings.ssl.validate()?;
        let thresholds = settings.thresholds.to_thresholds()?;
        Ok(Self::new(host, thresholds, settings.ssl.clone()))
    }
}

/// Run the check against the current wall clock
pub async fn run(config: &CheckConfig) -> CheckResult {
    run_at(config, Utc::now()).await
}

/// Run the check, measuring days left from `now`
pub async fn run_at(config: &CheckConfig, now: DateTime<Utc>) -> CheckResult {
    match days_left(config, now).await {
        Ok(days) => {
            let result = classify(days, &config.thresholds);
            info!(days_left = days, severity = %result.severity, "classified");
            result
        }
        Err(e) => {
            debug!(error = %e, "check failed");
            CheckResult::unknown(e.to_string())
        }
    }
}

async fn days_left(config: &CheckConfig, now: DateTime<Utc>) -> Result<i64> {
    let endpoint = normalize_with(&config.host, config.ssl.port_policy)?;
    debug!(host = %config.host, endpoint = %endpoint, "normalized");

    let leaf = SslChecker::new(config.ssl.clone()).fetch(&endpoint).await?;

    let checker = CertificateChecker::new();
    let not_after = checker.not_after(&leaf)?;
    debug!(not_after = %not_after, "leaf certificate");

    Ok(crate::checks::days_until_expiry(not_after, now))
}
