//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the bazaar crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "bazaar=debug",
            Self::Info => "bazaar=info",
            Self::Warning => "bazaar=warn",
            Self::Error => "bazaar=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_uppercase() {
        let cfg: LoggingConfig = toml::from_str("level = \"WARNING\"").unwrap();
        assert_eq!(cfg.level, LogLevel::Warning);
        assert_eq!(cfg.level.directive(), "bazaar=warn");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level.directive(), "bazaar=info");
    }
}
