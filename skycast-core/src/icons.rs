//! Mapping from OpenWeather condition codes to the themed `animated/` SVG set.
//!
//! The day/night variant comes from the icon code the API returns alongside
//! the condition code: a trailing `d` selects the day asset, anything else
//! (including an empty icon code) selects the night asset.

const BASE: &str = "animated/";

/// Resolve a condition code plus icon code to an asset path.
pub fn icon_asset(condition_code: u16, icon_code: &str) -> String {
    let is_day = icon_code.ends_with('d');
    format!("{BASE}{}", asset_name(condition_code, is_day))
}

fn asset_name(code: u16, is_day: bool) -> &'static str {
    fn day_night(is_day: bool, day: &'static str, night: &'static str) -> &'static str {
        if is_day { day } else { night }
    }

    match code {
        // Thunderstorm group.
        200..=299 => "thunderstorms.svg",

        // Drizzle reads as light rain.
        300..=399 => day_night(is_day, "rainy-1-day.svg", "rainy-1-night.svg"),

        // Rain, by intensity; 511 is freezing rain.
        511 => "rain-and-snow-mix.svg",
        500..=501 => day_night(is_day, "rainy-1-day.svg", "rainy-1-night.svg"),
        502..=504 => day_night(is_day, "rainy-2-day.svg", "rainy-2-night.svg"),
        520..=531 => day_night(is_day, "rainy-3-day.svg", "rainy-3-night.svg"),
        505..=599 => day_night(is_day, "rainy-2-day.svg", "rainy-2-night.svg"),

        // Snow, by intensity; 611-613 is sleet.
        611..=613 => "snow-and-sleet-mix.svg",
        600..=602 => day_night(is_day, "snowy-1-day.svg", "snowy-1-night.svg"),
        614..=622 => day_night(is_day, "snowy-2-day.svg", "snowy-2-night.svg"),
        603..=699 => day_night(is_day, "snowy-3-day.svg", "snowy-3-night.svg"),

        // Atmosphere: mist, smoke, haze, dust, fog, tornado.
        741 => day_night(is_day, "fog-day.svg", "fog-night.svg"),
        721 => day_night(is_day, "haze-day.svg", "haze-night.svg"),
        711 => "frost.svg",
        731 | 751 | 761 => "dust.svg",
        781 => "tornado.svg",
        700..=799 => "haze.svg",

        800 => day_night(is_day, "clear-day.svg", "clear-night.svg"),

        // Clouds: few / partly / overcast.
        801 => day_night(is_day, "cloudy-1-day.svg", "cloudy-1-night.svg"),
        802 => day_night(is_day, "cloudy-2-day.svg", "cloudy-2-night.svg"),
        803 | 804 => day_night(is_day, "cloudy-3-day.svg", "cloudy-3-night.svg"),

        _ => "cloudy.svg",
    }
}

/// Bare asset name without directory or extension, for text rendering.
pub fn icon_stem(condition_code: u16, icon_code: &str) -> String {
    let path = icon_asset(condition_code, icon_code);
    path.trim_start_matches(BASE).trim_end_matches(".svg").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorms_ignore_day_night() {
        assert_eq!(icon_asset(211, "01d"), "animated/thunderstorms.svg");
        assert_eq!(icon_asset(211, "01n"), "animated/thunderstorms.svg");
    }

    #[test]
    fn drizzle_maps_to_light_rain() {
        assert_eq!(icon_asset(301, "09d"), "animated/rainy-1-day.svg");
        assert_eq!(icon_asset(301, "09n"), "animated/rainy-1-night.svg");
    }

    #[test]
    fn rain_intensity_tiers() {
        assert_eq!(icon_asset(500, "10d"), "animated/rainy-1-day.svg");
        assert_eq!(icon_asset(503, "10d"), "animated/rainy-2-day.svg");
        assert_eq!(icon_asset(522, "10n"), "animated/rainy-3-night.svg");
        assert_eq!(icon_asset(511, "13d"), "animated/rain-and-snow-mix.svg");
        // Unlisted rain codes fall back to moderate rain.
        assert_eq!(icon_asset(599, "10n"), "animated/rainy-2-night.svg");
    }

    #[test]
    fn snow_intensity_tiers() {
        assert_eq!(icon_asset(600, "13d"), "animated/snowy-1-day.svg");
        assert_eq!(icon_asset(612, "13d"), "animated/snow-and-sleet-mix.svg");
        assert_eq!(icon_asset(620, "13n"), "animated/snowy-2-night.svg");
        assert_eq!(icon_asset(699, "13d"), "animated/snowy-3-day.svg");
    }

    #[test]
    fn atmosphere_sub_codes() {
        assert_eq!(icon_asset(741, "50d"), "animated/fog-day.svg");
        assert_eq!(icon_asset(741, "50n"), "animated/fog-night.svg");
        assert_eq!(icon_asset(721, "50d"), "animated/haze-day.svg");
        assert_eq!(icon_asset(711, "50d"), "animated/frost.svg");
        assert_eq!(icon_asset(731, "50d"), "animated/dust.svg");
        assert_eq!(icon_asset(751, "50n"), "animated/dust.svg");
        assert_eq!(icon_asset(761, "50d"), "animated/dust.svg");
        assert_eq!(icon_asset(781, "50d"), "animated/tornado.svg");
        assert_eq!(icon_asset(701, "50d"), "animated/haze.svg");
    }

    #[test]
    fn clear_and_clouds() {
        assert_eq!(icon_asset(800, "01d"), "animated/clear-day.svg");
        assert_eq!(icon_asset(800, "01n"), "animated/clear-night.svg");
        assert_eq!(icon_asset(801, "02d"), "animated/cloudy-1-day.svg");
        assert_eq!(icon_asset(802, "03n"), "animated/cloudy-2-night.svg");
        assert_eq!(icon_asset(803, "04d"), "animated/cloudy-3-day.svg");
        assert_eq!(icon_asset(804, "04n"), "animated/cloudy-3-night.svg");
    }

    #[test]
    fn unknown_codes_fall_back_to_generic_cloudy() {
        assert_eq!(icon_asset(0, ""), "animated/cloudy.svg");
        assert_eq!(icon_asset(900, "01d"), "animated/cloudy.svg");
    }

    #[test]
    fn empty_icon_code_counts_as_night() {
        assert_eq!(icon_asset(800, ""), "animated/clear-night.svg");
    }

    #[test]
    fn stem_strips_directory_and_extension() {
        assert_eq!(icon_stem(800, "01d"), "clear-day");
        assert_eq!(icon_stem(211, "11n"), "thunderstorms");
    }
}
