//! Expiry classification
//!
//! Maps the days left on a certificate onto a severity. CRITICAL is checked
//! before WARNING, so a count at or below `crit` is always critical.

use crate::models::{CheckResult, Severity, Thresholds};

pub fn classify(days_left: i64, thresholds: &Thresholds) -> CheckResult {
    if days_left <= i64::from(thresholds.crit()) {
        CheckResult::new(
            Severity::Critical,
            format!("critical: the SSL certificate will expire in {} days", days_left),
        )
    } else if days_left <= i64::from(thresholds.warn()) {
        CheckResult::new(
            Severity::Warning,
            format!("warning: the SSL certificate will expire in {} days", days_left),
        )
    } else {
        CheckResult::new(Severity::Ok, "")
    }
}
