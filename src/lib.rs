//! check-ssl-expiration library
//!
//! A monitoring plugin that reads a server's leaf TLS certificate and reports
//! how close it is to expiring:
//! - Host normalization into a `host:port` dial target
//! - Leaf certificate retrieval over TLS, trust verification optional
//! - Days-until-expiry evaluation
//! - OK / WARNING / CRITICAL / UNKNOWN classification with plugin exit codes
//!
//! # Usage
//!
//! ```rust,ignore
//! use check_ssl_expiration::config::Settings;
//! use check_ssl_expiration::runner::{self, CheckConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = CheckConfig::from_settings("example.com", &Settings::default()).unwrap();
//!     let result = runner::run(&config).await;
//!     println!("{}", result);
//!     std::process::exit(result.exit_code().into());
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{CheckResult, Endpoint, Severity, Thresholds};
pub use runner::CheckConfig;
pub use utils::{CheckError, Result};
