//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use tracing::{debug, info};

/// Loads application configuration.
///
/// Configuration is merged from multiple sources in order:
/// 1. `{config_dir}/default.toml` - Default values
/// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
/// 3. Environment variables with `ROSTER_` prefix (`ROSTER_SERVER__PORT` etc.)
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader reading from the given directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader reading from the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and merges the configuration sources.
    pub fn load(&self) -> Result<AppConfig, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", self.config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", self.config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("ROSTER").separator("__"));

        let config = builder
            .build()
            .map_err(|e| RosterError::Configuration(e.to_string()))?;

        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| RosterError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap());
        let config = loader.load().unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.security.password_hash_cost, 12);
    }

    #[test]
    fn test_load_merges_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("default.toml")).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 4100\ncors_enabled = false\ncors_origins = []\n\n[database]\nurl = \"mysql://u:p@localhost/roster_test\"\nmin_connections = 2\nmax_connections = 4\nconnect_timeout_secs = 3\nidle_timeout_secs = 60\n"
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap());
        let config = loader.load().unwrap();

        assert_eq!(config.server.addr(), "127.0.0.1:4100");
        assert!(!config.server.cors_enabled);
        assert_eq!(config.database.max_connections, 4);
        // Untouched sections fall back to defaults
        assert_eq!(config.security.password_hash_cost, 12);
    }
}
