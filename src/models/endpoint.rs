//! Dial target types

use serde::Deserialize;
use std::fmt;

/// Port used when the host string does not decide it
pub const HTTPS_PORT: u16 = 443;

/// How the normalizer picks the port to dial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortPolicy {
    /// Always dial 443, whatever port the host string carries
    #[default]
    Fixed,
    /// Dial the port written in the host string, 443 when there is none
    FromUrl,
}

/// A `host:port` dial target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Hostname or IP literal, without brackets
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
