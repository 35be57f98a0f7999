//! Bazaar configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bazaar_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::BazaarConfig;

use bazaar_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` in the OS config directory if none exists.
pub fn load_config() -> Result<BazaarConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override) and validate it.
pub fn load_config_from(path: &Path) -> Result<BazaarConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
