//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod humidity;
mod temperature;
mod theme_mode;
mod utc_offset;
mod wind_speed;

pub use city_name::CityName;
pub use humidity::Humidity;
pub use temperature::Temperature;
pub use theme_mode::ThemeMode;
pub use utc_offset::UtcOffset;
pub use wind_speed::WindSpeed;
