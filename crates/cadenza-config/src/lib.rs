//! # Cadenza Config
//!
//! Layered configuration loading for the Cadenza music catalog:
//! TOML files under `config/` overridden by `CADENZA_*` environment
//! variables, with a `.env` file picked up in development.

mod app_config;
mod loader;

pub use app_config::{AppConfig, AppMetadata, DatabaseConfig, RedisConfig, ServerConfig};
pub use loader::ConfigLoader;
