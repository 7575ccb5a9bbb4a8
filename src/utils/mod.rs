//! Utility modules for the expiry check
//!
//! This module contains the error types shared by every stage.

pub mod error;

pub use error::{ConfigError, CheckError, Result};
