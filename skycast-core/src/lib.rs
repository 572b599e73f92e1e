//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeatherMap implementation
//! - Shared domain models (current conditions, forecast entries, air quality)
//! - Pure dashboard logic: icon selection, display formatting, forecast
//!   reduction, and the fetch-cycle orchestration
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod dashboard;
pub mod forecast;
pub mod format;
pub mod icons;
pub mod model;
pub mod provider;

pub use config::{Config, FALLBACK_CITY};
pub use dashboard::load_dashboard;
pub use model::{
    AirQuality, Coordinates, CurrentConditions, Dashboard, ForecastEntry, LocationQuery, Place,
};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
