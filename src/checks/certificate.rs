//! Certificate expiry evaluation
//!
//! Reads the not-after date from a leaf certificate using x509-parser and
//! turns it into a whole number of days relative to a given instant.

use crate::models::LeafCertificate;
use crate::utils::{CheckError, Result};
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// Certificate parser and expiry evaluator
pub struct CertificateChecker;

impl CertificateChecker {
    pub fn new() -> Self {
        Self
    }

    /// Extract the not-after timestamp of a DER-encoded certificate
    pub fn not_after(&self, cert: &LeafCertificate) -> Result<DateTime<Utc>> {
        let (_, parsed) =
            X509Certificate::from_der(cert.der()).map_err(|e| CheckError::Certificate {
                message: e.to_string(),
            })?;

        asn1_time_to_datetime(parsed.validity().not_after)
    }

    /// Whole days left before `cert` expires, as seen from `now`
    pub fn days_until_expiry(&self, cert: &LeafCertificate, now: DateTime<Utc>) -> Result<i64> {
        Ok(days_until_expiry(self.not_after(cert)?, now))
    }
}

impl Default for CertificateChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Days between `now` and `not_after`, truncated toward zero.
///
/// A certificate that expired less than a day ago reads as 0, one that
/// expired 26 hours ago as -1.
pub fn days_until_expiry(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (not_after - now).num_days()
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| CheckError::Certificate {
            message: "invalid not-after timestamp".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fractional_days_truncate() {
        let not_after = now() + Duration::days(10) + Duration::hours(3);
        assert_eq!(days_until_expiry(not_after, now()), 10);

        let not_after = now() + Duration::days(6) + Duration::hours(22);
        assert_eq!(days_until_expiry(not_after, now()), 6);
    }

    #[test]
    fn test_recently_expired_reads_zero() {
        let not_after = now() - Duration::hours(1);
        assert_eq!(days_until_expiry(not_after, now()), 0);
    }

    #[test]
    fn test_expired_truncates_toward_zero() {
        let not_after = now() - Duration::hours(26);
        assert_eq!(days_until_expiry(not_after, now()), -1);
    }

    #[test]
    fn test_same_instant() {
        assert_eq!(days_until_expiry(now(), now()), 0);
    }

    #[test]
    fn test_garbage_der_is_certificate_error() {
        let checker = CertificateChecker::new();
        let err = checker
            .not_after(&LeafCertificate::from_der(vec![0x30, 0x03, 0x01, 0x02]))
            .unwrap_err();
        assert!(matches!(err, CheckError::Certificate { .. }));
    }
}
