//! Panel renderers: turn fetched data into the text blocks the dashboard prints.
//!
//! Every function is pure and returns the panel as a string; the caller
//! decides where it goes. Timestamps are shown in the queried place's local
//! time, using the UTC offset the API reports.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use skycast_core::format::{
    capitalize_words, clock_time, dashboard_date, mps_to_kmh, sun_time, weekday,
};
use skycast_core::icons::icon_stem;
use skycast_core::model::{AirQuality, CurrentConditions, ForecastEntry};

fn place_local(at: DateTime<Utc>, utc_offset_secs: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(utc_offset_secs)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    at.with_timezone(&offset)
}

/// Header panel: place, temperature, condition, details, sun times.
///
/// `today` and `now` are the machine-local date and clock time.
pub fn current_panel(c: &CurrentConditions, today: NaiveDate, now: NaiveTime) -> String {
    let city = if c.city.is_empty() { "--" } else { &c.city };
    let place = if c.country.is_empty() {
        city.to_string()
    } else {
        format!("{city}, {}", c.country)
    };

    let sunrise = place_local(c.sunrise, c.utc_offset_secs).time();
    let sunset = place_local(c.sunset, c.utc_offset_secs).time();

    let mut out = String::new();
    out.push_str(&format!(
        "{place}    {}  {}\n",
        dashboard_date(today),
        clock_time(now)
    ));
    out.push_str(&format!(
        "{}°C  {}  [{}]\n",
        c.temperature_c.round(),
        capitalize_words(&c.description),
        icon_stem(c.condition_code, &c.icon_code)
    ));
    out.push_str(&format!("Feels like  {}°C\n", c.feels_like_c.round()));
    out.push_str(&format!("Pressure    {} hPa\n", c.pressure_hpa));
    out.push_str(&format!("Humidity    {}%\n", c.humidity_pct));
    out.push_str(&format!("Wind        {:.1} km/h\n", mps_to_kmh(c.wind_speed_mps)));
    out.push_str(&format!("Sunrise     {}\n", sun_time(sunrise)));
    out.push_str(&format!("Sunset      {}\n", sun_time(sunset)));
    out
}

/// One row per representative day: weekday, icon, rounded temperature.
pub fn daily_panel(days: &[ForecastEntry], utc_offset_secs: i32) -> String {
    let mut out = String::from("5-Day Forecast\n");
    for e in days {
        let date = place_local(e.at, utc_offset_secs).date_naive();
        out.push_str(&format!(
            "  {:<10} {:<18} {}°C\n",
            weekday(date),
            icon_stem(e.condition_code, &e.icon_code),
            e.temperature_c.round()
        ));
    }
    out
}

/// The next ~24 hours in 3-hour steps.
pub fn hourly_panel(hours: &[ForecastEntry], utc_offset_secs: i32) -> String {
    let mut out = String::from("Next 24 Hours\n");
    for e in hours {
        let time = place_local(e.at, utc_offset_secs).time();
        out.push_str(&format!(
            "  {:<9} {:<18} {}°C\n",
            sun_time(time),
            icon_stem(e.condition_code, &e.icon_code),
            e.temperature_c.round()
        ));
    }
    out
}

fn component(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.2}"))
}

/// Pollutant concentrations plus the 1-5 index label.
pub fn air_panel(air: Option<&AirQuality>) -> String {
    let Some(air) = air else {
        return "Air Quality\n  N/A\n".to_string();
    };

    let mut out = match air.index_label() {
        Some(label) => format!("Air Quality: {label}\n"),
        None => "Air Quality\n".to_string(),
    };
    out.push_str(&format!("  PM2.5  {}\n", component(air.pm2_5)));
    out.push_str(&format!("  SO2    {}\n", component(air.so2)));
    out.push_str(&format!("  NO2    {}\n", component(air.no2)));
    out.push_str(&format!("  O3     {}\n", component(air.o3)));
    out
}

/// Shown instead of the dashboard when the API does not know the city.
pub fn not_found_panel() -> String {
    "City not found!\nPlease check city name.\n".to_string()
}
