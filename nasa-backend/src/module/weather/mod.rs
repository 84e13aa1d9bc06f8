//! Mars weather passthrough

pub mod proxy;

pub use proxy::{WeatherProxy, WEATHER_ERROR_MESSAGE};
