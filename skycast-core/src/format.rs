//! Display formatting helpers for the dashboard panels.
//!
//! All functions are pure; callers convert timestamps into the wanted time
//! zone (machine-local for the clock panel, place-local for sun times and
//! forecast slots) before formatting.

use chrono::{NaiveDate, NaiveTime};

/// `6:05 AM` style, no leading zero. Used for sunrise/sunset and hourly slots.
pub fn sun_time(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// `23-08-2026` style date for the header panel.
pub fn dashboard_date(d: NaiveDate) -> String {
    d.format("%d-%m-%Y").to_string()
}

/// `07:45 PM` style, zero-padded hour. Used for the header clock.
pub fn clock_time(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// Full weekday name, e.g. `Monday`.
pub fn weekday(d: NaiveDate) -> String {
    d.format("%A").to_string()
}

/// Uppercase the first letter of each space-separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wind speed conversion for display; the API reports metres per second.
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn sun_time_has_no_leading_zero() {
        assert_eq!(sun_time(time(6, 5)), "6:05 AM");
        assert_eq!(sun_time(time(18, 42)), "6:42 PM");
        assert_eq!(sun_time(time(0, 0)), "12:00 AM");
        assert_eq!(sun_time(time(12, 0)), "12:00 PM");
    }

    #[test]
    fn clock_time_pads_the_hour() {
        assert_eq!(clock_time(time(19, 45)), "07:45 PM");
        assert_eq!(clock_time(time(9, 3)), "09:03 AM");
    }

    #[test]
    fn date_is_day_month_year_with_dashes() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(dashboard_date(d), "23-08-2026");
    }

    #[test]
    fn weekday_is_the_full_name() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(weekday(d), "Monday");
    }

    #[test]
    fn capitalize_words_handles_multi_word_descriptions() {
        assert_eq!(capitalize_words("scattered clouds"), "Scattered Clouds");
        assert_eq!(capitalize_words("light rain"), "Light Rain");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("mist"), "Mist");
    }

    #[test]
    fn wind_conversion() {
        let kmh = mps_to_kmh(3.1);
        assert!((kmh - 11.16).abs() < 1e-9);
        assert_eq!(format!("{kmh:.1}"), "11.2");
    }
}
