use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{
    Config,
    model::{AirQuality, Coordinates, CurrentConditions, ForecastEntry, LocationQuery, Place},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// Failures the caller may want to distinguish from generic errors.
///
/// Carried inside `anyhow::Error`; recover with `err.downcast_ref::<FetchError>()`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API does not know the requested location (HTTP 404).
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the API.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Source of weather data for the dashboard.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current observation for a city or position.
    async fn current(&self, query: &LocationQuery) -> anyhow::Result<CurrentConditions>;

    /// The 5-day / 3-hour forecast list, in chronological order.
    async fn forecast(&self, query: &LocationQuery) -> anyhow::Result<Vec<ForecastEntry>>;

    /// Air-quality sample for a position.
    async fn air_quality(&self, coord: Coordinates) -> anyhow::Result<AirQuality>;

    /// Friendly place label for a position, if the API knows one.
    async fn reverse_geocode(&self, coord: Coordinates) -> anyhow::Result<Option<Place>>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key()?;
    Ok(OpenWeatherProvider::new(api_key.to_owned()))
}
