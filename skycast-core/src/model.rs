use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Short label used when reverse geocoding yields nothing.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// What the user asked for: a city name or an explicit position.
#[derive(Debug, Clone)]
pub enum LocationQuery {
    City(String),
    Position(Coordinates),
}

/// Current observation for one place, metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub coord: Coordinates,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Lowercase condition text as the API reports it, e.g. "scattered clouds".
    pub description: String,
    pub condition_code: u16,
    pub icon_code: String,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Offset of the place from UTC, in seconds.
    pub utc_offset_secs: i32,
}

/// One 3-hour slot from the forecast list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub at: DateTime<Utc>,
    pub temperature_c: f64,
    pub description: String,
    pub condition_code: u16,
    pub icon_code: String,
}

/// Reverse-geocoding result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
}

/// Air-quality sample; every field may be absent in the API response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirQuality {
    /// Index 1 (good) ..= 5 (very poor).
    pub index: Option<u8>,
    pub pm2_5: Option<f64>,
    pub so2: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
}

impl AirQuality {
    pub fn index_label(&self) -> Option<&'static str> {
        match self.index? {
            1 => Some("Good"),
            2 => Some("Fair"),
            3 => Some("Moderate"),
            4 => Some("Poor"),
            5 => Some("Very Poor"),
            _ => None,
        }
    }
}

/// Everything one fetch cycle produces, ready for rendering.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub current: CurrentConditions,
    /// Up to 5 representative daily entries.
    pub daily: Vec<ForecastEntry>,
    /// The next ~24 hours in 3-hour steps.
    pub hourly: Vec<ForecastEntry>,
    /// `None` when the air-quality fetch failed; the rest still renders.
    pub air: Option<AirQuality>,
}
