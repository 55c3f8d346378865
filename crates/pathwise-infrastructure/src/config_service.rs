//! Configuration loading.
//!
//! Reads the optional `~/.config/pathwise/config.toml`, falling back to
//! defaults, and validates before anything else starts. A malformed file
//! or invalid setting is fatal here, never discovered mid-query.

use anyhow::Context;
use pathwise_core::config::AppConfig;
use pathwise_core::error::{CounselError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the default config file path (`~/.config/pathwise/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pathwise").join("config.toml"))
}

/// Loads configuration from the given path, or from the default location
/// when `None`. A missing file yields the defaults; a present-but-invalid
/// file is a configuration error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path(),
    };

    let config = match resolved {
        Some(ref p) if p.exists() => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("Failed to read config file: {:?}", p))
                .map_err(|e| CounselError::config(e.to_string()))?;
            let config: AppConfig = toml::from_str(&content)
                .map_err(|e| CounselError::config(format!("Invalid config file {:?}: {}", p, e)))?;
            info!(path = ?p, "loaded configuration file");
            config
        }
        _ => AppConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Resolves the session data directory: explicit config value first, then
/// the platform data directory.
pub fn resolve_data_dir(config: &AppConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join("pathwise"))
        .ok_or_else(|| CounselError::config("Could not determine a data directory"))
}
