//! Entities - Domain objects with identity and lifecycle

mod weather_report;

pub use weather_report::WeatherReport;
