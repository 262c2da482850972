//! # skillnow-config
//!
//! Layered configuration loading for SkillNow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKILLNOW_*` prefix, `__` as separator)
//! 2. Working-directory `skillnow.toml`
//! 3. User-level `~/.config/skillnow/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SKILLNOW_SERVER__PORT` -> `server.port`,
//! `SKILLNOW_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use skillnow_config::SkillNowConfig;
//!
//! let config = SkillNowConfig::load_with_dotenv().expect("config");
//! println!("serving tables from {}", config.storage.data_dir.display());
//! ```

mod cors;
mod error;
mod server;
mod storage;

pub use cors::{CorsConfig, DEPLOYED_FRONTEND_ORIGIN};
pub use error::ConfigError;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "skillnow.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SkillNowConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl SkillNowConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.cors.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SKILLNOW_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skillnow").join("config.toml"))
    }
}
