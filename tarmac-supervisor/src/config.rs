//! Supervisor configuration
//!
//! Defines all configurable parameters for the supervisor including
//! collaborator endpoints, the bind address, and outbound-call timeouts.
//! Collaborator endpoints are required: a missing endpoint is fatal at
//! startup, not a per-request error.

use std::time::Duration;

/// Supervisor configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Endpoint of the image-detection service
    pub detection_url: String,

    /// Endpoint of the form-generation service
    pub forms_url: String,

    /// Endpoint of the report-submission service
    pub submission_url: String,

    /// Endpoint of the conversational model service
    pub chat_model_url: String,

    /// Timeout applied to every outbound collaborator call
    ///
    /// Collaborators are LLM-latency services; a timed-out call is treated
    /// the same as any other transport failure for that stage.
    pub collaborator_timeout: Duration,

    /// Maximum number of live conversational sessions
    ///
    /// `None` keeps the store unbounded; otherwise the least recently
    /// active session is evicted when the cap is exceeded.
    pub max_sessions: Option<usize>,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DETECTION_API_URL (required)
    /// - FORMS_API_URL (required)
    /// - SUBMISSION_API_URL (required)
    /// - CHAT_MODEL_URL (required)
    /// - SUPERVISOR_BIND_ADDR (optional, default: 0.0.0.0:8085)
    /// - COLLABORATOR_TIMEOUT (optional, seconds, default: 30)
    /// - MAX_SESSIONS (optional, default: unbounded)
    pub fn from_env() -> anyhow::Result<Self> {
        let detection_url = require_var("DETECTION_API_URL")?;
        let forms_url = require_var("FORMS_API_URL")?;
        let submission_url = require_var("SUBMISSION_API_URL")?;
        let chat_model_url = require_var("CHAT_MODEL_URL")?;

        let bind_addr =
            std::env::var("SUPERVISOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8085".to_string());

        let collaborator_timeout = std::env::var("COLLABORATOR_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let max_sessions = std::env::var("MAX_SESSIONS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0);

        Ok(Self {
            bind_addr,
            detection_url,
            forms_url,
            submission_url,
            chat_model_url,
            collaborator_timeout,
            max_sessions,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        for (name, url) in [
            ("detection_url", &self.detection_url),
            ("forms_url", &self.forms_url),
            ("submission_url", &self.submission_url),
            ("chat_model_url", &self.chat_model_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.collaborator_timeout.as_secs() == 0 {
            anyhow::bail!("collaborator_timeout must be greater than 0");
        }

        Ok(())
    }
}

fn require_var(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable not set", name))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8085".to_string(),
            detection_url: "http://localhost:9000/analyze".to_string(),
            forms_url: "http://localhost:9001/generate_form".to_string(),
            submission_url: "http://localhost:9002/submit_report".to_string(),
            chat_model_url: "http://localhost:9003/generate".to_string(),
            collaborator_timeout: Duration::from_secs(30),
            max_sessions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collaborator_timeout, Duration::from_secs(30));
        assert_eq!(config.max_sessions, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Invalid URL should fail
        config.detection_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.detection_url = "http://localhost:9000/analyze".to_string();
        assert!(config.validate().is_ok());

        // Zero timeout should fail
        config.collaborator_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
