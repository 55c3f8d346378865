//! Application configuration model.
//!
//! The configuration file is optional; every field has a default that
//! matches the documented behavior (24 hour session cleanup, 2 generator
//! attempts with a 500 ms delay). Validation failures are fatal at
//! startup, before any query is processed.

use crate::error::{CounselError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for session storage. Defaults to
    /// `~/.local/share/pathwise` (resolved by the infrastructure layer
    /// when unset).
    pub data_dir: Option<PathBuf>,
    /// Sessions idle longer than this many hours are eligible for cleanup.
    pub session_cleanup_hours: u64,
    /// Bounded attempts for the external generator call.
    pub max_retry_attempts: u32,
    /// Delay between generator attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Model name passed to the hosted generator.
    pub model: String,
    /// Maximum tokens requested from the generator.
    pub max_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            session_cleanup_hours: 24,
            max_retry_attempts: 2,
            retry_delay_ms: 500,
            model: "gpt-4o".to_string(),
            max_tokens: 1024,
        }
    }
}

impl AppConfig {
    /// Validates the configuration. Called once at startup; any error here
    /// is fatal before query processing begins.
    pub fn validate(&self) -> Result<()> {
        if self.max_retry_attempts == 0 {
            return Err(CounselError::config(
                "max_retry_attempts must be at least 1",
            ));
        }
        if self.model.trim().is_empty() {
            return Err(CounselError::config("model must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(CounselError::config("max_tokens must be at least 1"));
        }
        Ok(())
    }

    /// The session cleanup age as a chrono duration.
    pub fn cleanup_max_age(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_cleanup_hours as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_cleanup_hours, 24);
        assert_eq!(config.max_retry_attempts, 2);
        assert_eq!(config.retry_delay_ms, 500);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = AppConfig {
            max_retry_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = AppConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("session_cleanup_hours = 48").unwrap();
        assert_eq!(config.session_cleanup_hours, 48);
        assert_eq!(config.model, "gpt-4o");
    }
}
