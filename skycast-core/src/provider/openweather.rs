use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{
    AirQuality, Coordinates, CurrentConditions, ForecastEntry, LocationQuery, Place,
};

use super::{FetchError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Query parameters selecting the location, per the API's two addressing modes.
    fn location_params(query: &LocationQuery) -> Vec<(String, String)> {
        match query {
            LocationQuery::City(city) => vec![("q".into(), city.clone())],
            LocationQuery::Position(c) => {
                vec![("lat".into(), c.lat.to_string()), ("lon".into(), c.lon.to_string())]
            }
        }
    }

    fn query_label(query: &LocationQuery) -> String {
        match query {
            LocationQuery::City(city) => city.clone(),
            LocationQuery::Position(c) => c.label(),
        }
    }

    /// GET a path and return the body, mapping non-success statuses to errors.
    ///
    /// `not_found_label` turns a 404 into [`FetchError::NotFound`] for the
    /// endpoints where a missing location is an expected outcome.
    async fn fetch_body(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &[(String, String)],
        not_found_label: Option<&str>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(label) = not_found_label {
                return Err(FetchError::NotFound(label.to_string()).into());
            }
        }

        if !status.is_success() {
            return Err(FetchError::Api {
                endpoint,
                status,
                body: truncate_body(&body),
            }
            .into());
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentConditions> {
        let mut params = Self::location_params(query);
        params.push(("units".into(), "metric".into()));

        let label = Self::query_label(query);
        let body = self
            .fetch_body("current weather", "/data/2.5/weather", &params, Some(&label))
            .await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let observed_at = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);
        let (description, condition_code, icon_code) = split_weather(&parsed.weather);

        Ok(CurrentConditions {
            city: parsed.name,
            country: parsed.sys.country.unwrap_or_default(),
            coord: Coordinates { lat: parsed.coord.lat, lon: parsed.coord.lon },
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            description,
            condition_code,
            icon_code,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            wind_speed_mps: parsed.wind.speed,
            sunrise: parsed.sys.sunrise.and_then(unix_to_utc).unwrap_or(observed_at),
            sunset: parsed.sys.sunset.and_then(unix_to_utc).unwrap_or(observed_at),
            utc_offset_secs: parsed.timezone,
        })
    }

    async fn forecast(&self, query: &LocationQuery) -> Result<Vec<ForecastEntry>> {
        let mut params = Self::location_params(query);
        params.push(("units".into(), "metric".into()));

        let label = Self::query_label(query);
        let body = self
            .fetch_body("5-day forecast", "/data/2.5/forecast", &params, Some(&label))
            .await?;

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        let entries = parsed
            .list
            .into_iter()
            .map(|e| {
                let (description, condition_code, icon_code) = split_weather(&e.weather);
                ForecastEntry {
                    at: unix_to_utc(e.dt).unwrap_or_else(Utc::now),
                    temperature_c: e.main.temp,
                    description,
                    condition_code,
                    icon_code,
                }
            })
            .collect();

        Ok(entries)
    }

    async fn air_quality(&self, coord: Coordinates) -> Result<AirQuality> {
        let params = Self::location_params(&LocationQuery::Position(coord));

        let body = self
            .fetch_body("air pollution", "/data/2.5/air_pollution", &params, None)
            .await?;

        let parsed: OwAirResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather air pollution JSON")?;

        let sample = parsed
            .list
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather air pollution response contained no data"))?;

        Ok(AirQuality {
            index: sample.main.aqi,
            pm2_5: sample.components.pm2_5,
            so2: sample.components.so2,
            no2: sample.components.no2,
            o3: sample.components.o3,
        })
    }

    async fn reverse_geocode(&self, coord: Coordinates) -> Result<Option<Place>> {
        let mut params = Self::location_params(&LocationQuery::Position(coord));
        params.push(("limit".into(), "1".into()));

        let body = self
            .fetch_body("reverse geocoding", "/geo/1.0/reverse", &params, None)
            .await?;

        let parsed: Vec<OwGeoPlace> = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather reverse geocoding JSON")?;

        Ok(parsed.into_iter().next().map(|p| Place {
            name: p.name,
            country: p.country.unwrap_or_default(),
        }))
    }
}

/// Condition description, code and icon code from the (possibly empty)
/// `weather` array.
fn split_weather(weather: &[OwWeather]) -> (String, u16, String) {
    match weather.first() {
        Some(w) => (w.description.clone(), w.id, w.icon.clone()),
        None => ("Unknown".to_string(), 0, String::new()),
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: u8,
    #[serde(default)]
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize, Default)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize, Default)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: String,
    dt: i64,
    /// Shift in seconds from UTC.
    #[serde(default)]
    timezone: i32,
    coord: OwCoord,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize, Default)]
struct OwAirMain {
    aqi: Option<u8>,
}

#[derive(Debug, Deserialize, Default)]
struct OwAirComponents {
    pm2_5: Option<f64>,
    so2: Option<f64>,
    no2: Option<f64>,
    o3: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwAirEntry {
    #[serde(default)]
    main: OwAirMain,
    #[serde(default)]
    components: OwAirComponents,
}

#[derive(Debug, Deserialize)]
struct OwAirResponse {
    #[serde(default)]
    list: Vec<OwAirEntry>,
}

#[derive(Debug, Deserialize)]
struct OwGeoPlace {
    name: String,
    country: Option<String>,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_weather_defaults_when_array_is_empty() {
        let (desc, code, icon) = split_weather(&[]);
        assert_eq!(desc, "Unknown");
        assert_eq!(code, 0);
        assert_eq!(icon, "");
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let cut = truncate_body(&long);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn location_params_for_both_addressing_modes() {
        let by_city = OpenWeatherProvider::location_params(&LocationQuery::City("Kyiv".into()));
        assert_eq!(by_city, vec![("q".to_string(), "Kyiv".to_string())]);

        let by_pos = OpenWeatherProvider::location_params(&LocationQuery::Position(
            Coordinates { lat: 50.45, lon: 30.52 },
        ));
        assert_eq!(by_pos[0], ("lat".to_string(), "50.45".to_string()));
        assert_eq!(by_pos[1], ("lon".to_string(), "30.52".to_string()));
    }
}
