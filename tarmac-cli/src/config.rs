//! Configuration module
//!
//! Handles CLI configuration including the supervisor URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the supervisor service
    pub supervisor_url: String,
}
