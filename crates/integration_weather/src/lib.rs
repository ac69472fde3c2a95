//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Looks up conditions by city name
//! using the `q`, `appid` and `units` query parameters.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherApiConfig, WeatherClient, WeatherError};
pub use models::{
    ConditionSection, CurrentWeatherResponse, MainSection, Observation, SysSection, WindSection,
};
