//! Application configuration
//!
//! Loaded from an optional `config.toml` next to the binary, overridden by
//! `BREEZE_`-prefixed environment variables.

use std::path::PathBuf;

use integration_weather::WeatherApiConfig;
use serde::{Deserialize, Serialize};

/// SQLite database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the preferences database file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("breeze.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// City looked up when the command line does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,

    /// Weather provider configuration (API key lives here)
    #[serde(default)]
    pub weather: WeatherApiConfig,

    /// Preference database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., BREEZE_DEFAULT_CITY)
            .add_source(
                config::Environment::with_prefix("BREEZE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
