//! CLI argument definitions using clap

use crate::config::Settings;
use crate::models::PortPolicy;
use crate::runner::CheckConfig;
use crate::utils::{ConfigError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "check-ssl-expiration")]
#[command(about = "Monitoring plugin that checks how many days remain before a server's SSL certificate expires", long_about = None)]
pub struct Cli {
    /// The URL from where to get the SSL certificate
    #[arg(short = 'H', long, default_value = "https://localhost")]
    pub host: String,

    /// How many days til expiration constitutes a WARNING [default: 15]
    #[arg(short, long, value_name = "DAYS")]
    pub warn: Option<u32>,

    /// How many days til expiration constitutes a CRITICAL alert [default: 7]
    #[arg(short, long, value_name = "DAYS")]
    pub crit: Option<u32>,

    /// Connect and handshake timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Dial the port given in --host instead of always using 443
    #[arg(long)]
    pub use_url_port: bool,

    /// Verify the certificate chain against the Mozilla root store
    #[arg(long)]
    pub verify_trust: bool,

    /// Read settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Show version number
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// Settings from the config file (or defaults) with command-line flags applied on top
    pub fn settings(&self) -> std::result::Result<Settings, ConfigError> {
        let mut settings = Settings::load(self.config.as_deref())?;

        if let Some(timeout) = self.timeout {
            settings.ssl.connect_timeout_secs = timeout;
            settings.ssl.handshake_timeout_secs = timeout;
        }
        if self.use_url_port {
            settings.ssl.port_policy = PortPolicy::FromUrl;
        }
        if self.verify_trust {
            settings.ssl.skip_trust_verification = false;
        }
        if let Some(warn) = self.warn {
            settings.thresholds.warn = warn;
        }
        if let Some(crit) = self.crit {
            settings.thresholds.crit = crit;
        }

        Ok(settings)
    }

    /// Validated configuration for one check run
    pub fn check_config(&self) -> Result<CheckConfig> {
        let settings = self.settings()?;
        CheckConfig::from_settings(&self.host, &settings)
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Version banner printed by `--version`
pub fn version_line() -> String {
    format!("check-ssl-expiration {}", env!("CARGO_PKG_VERSION"))
}
