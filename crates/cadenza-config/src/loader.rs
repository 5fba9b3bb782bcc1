//! Configuration loader with layered sources.

use crate::AppConfig;
use cadenza_core::CatalogError;
use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};

/// Loads application configuration from TOML files and the environment.
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader for the given configuration directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads the configuration.
    ///
    /// Sources are layered in order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (from `CADENZA_ENVIRONMENT`)
    /// 3. `config/local.toml` (not committed to version control)
    /// 4. Environment variables with the `CADENZA_` prefix (`__` separator)
    pub fn load(&self) -> Result<AppConfig, CatalogError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let environment =
            std::env::var("CADENZA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default".to_string(), environment, "local".to_string()] {
            let path = format!("{}/{}.toml", self.config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config file: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CADENZA")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CatalogError::Configuration(e.to_string()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Rejects configurations that cannot possibly start.
    fn validate(config: &AppConfig) -> Result<(), CatalogError> {
        if config.database.url.is_empty() {
            return Err(CatalogError::Configuration(
                "database.url must not be empty".to_string(),
            ));
        }
        if !config.database.url.starts_with("mysql://") {
            return Err(CatalogError::Configuration(format!(
                "database.url must be a mysql:// URL, got '{}'",
                config.database.url
            )));
        }
        if config.redis.enabled && config.redis.url.is_empty() {
            return Err(CatalogError::Configuration(
                "redis.url must not be empty when redis is enabled".to_string(),
            ));
        }
        if config.database.max_connections == 0 {
            return Err(CatalogError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
