//! Error types for the expiry check
//!
//! Every failure short-circuits the pipeline and is reported verbatim as the
//! UNKNOWN message, so the `Display` text of each variant is user-facing.

use thiserror::Error;

/// Top-level error type for a check run
#[derive(Error, Debug)]
pub enum CheckError {
    /// The host string could not be parsed as a URL
    #[error("{0}")]
    Parse(#[from] url::ParseError),

    /// TCP connect, TLS handshake or timeout failure
    #[error("{message}")]
    Connection { message: String },

    #[error("no certificates found")]
    NoCertificate,

    #[error("failed to parse certificate: {message}")]
    Certificate { message: String },

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
