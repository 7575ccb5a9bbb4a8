//! Configuration module for the expiry check
//!
//! Handles loading settings from an optional TOML file.

pub mod settings;

pub use settings::{Settings, SslSettings, ThresholdSettings};
