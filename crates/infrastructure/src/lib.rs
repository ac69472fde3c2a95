//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! adapter behind `WeatherPort`, SQLite persistence behind
//! `PreferenceStore`, and configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, DatabaseConfig};
pub use persistence::SqliteThemeStore;
