//! Data models for the expiry check
//!
//! Every value here lives for a single run and is discarded afterwards.

pub mod certificate;
pub mod check_result;
pub mod endpoint;
pub mod thresholds;

pub use certificate::LeafCertificate;
pub use check_result::{CheckResult, Severity};
pub use endpoint::{Endpoint, PortPolicy, HTTPS_PORT};
pub use thresholds::{Thresholds, DEFAULT_CRIT_DAYS, DEFAULT_WARN_DAYS};
