//! Check stages
//!
//! Normalization, certificate retrieval, expiry evaluation and classification,
//! each usable on its own.

pub mod certificate;
pub mod classifier;
pub mod endpoint;
pub mod ssl;

pub use certificate::{days_until_expiry, CertificateChecker};
pub use classifier::classify;
pub use endpoint::{normalize, normalize_with};
pub use ssl::SslChecker;
