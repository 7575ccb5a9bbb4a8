//! Check outcome types

use std::fmt;

/// Severity of a check outcome, following the monitoring-plugin convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Process exit status understood by monitoring dispatchers
    pub fn exit_code(&self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Label printed in front of the message
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final result of a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
    /// Performance data; this check never emits any
    pub perf_data: Option<String>,
}

impl CheckResult {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            perf_data: None,
        }
    }

    /// Result for a failure upstream of classification
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(perf) = &self.perf_data {
            write!(f, " | {}", perf)?;
        }
        Ok(())
    }
}
