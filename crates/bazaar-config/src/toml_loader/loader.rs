//! Core TOML config loading: read from path or platform default.

use crate::schema::BazaarConfig;
use crate::validation;
use bazaar_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation failures are logged as a
/// warning and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<BazaarConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BazaarConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/bazaar/config.toml`
/// On macOS: `~/Library/Application Support/bazaar/config.toml`
///
/// If the file does not exist, writes the default template and returns defaults.
pub fn load_default() -> Result<BazaarConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(BazaarConfig::default());
    }

    load_from_path(&path)
}
