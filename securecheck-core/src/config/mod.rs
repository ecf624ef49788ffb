pub mod database_config;
pub mod telemetry_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

pub use database_config::DatabaseConfig;
pub use telemetry_config::TelemetryConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Parse config from a TOML string, falling back to defaults for
    /// missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.database.path.to_str(), Some("securecheck.db"));
        assert!(config.database.wal);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [database]
            path = "/tmp/stops.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path.to_str(), Some("/tmp/stops.db"));
        assert_eq!(config.database.busy_timeout_ms, 5000);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("database = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
