use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::Text;
use tracing::debug;

use skycast_core::{
    Config, Coordinates, Dashboard, FetchError, LocationQuery, load_dashboard,
    provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and an optional default city.
    Configure,

    /// Show the dashboard for a city (the configured default when omitted).
    Show {
        /// City name, e.g. "Bengaluru" or "Kyiv,UA".
        city: Option<String>,
    },

    /// Show the dashboard for explicit coordinates.
    Here {
        /// Latitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let config = Config::load()?;
                let city = city.unwrap_or_else(|| config.default_city().to_string());
                show(&config, LocationQuery::City(city)).await
            }
            Command::Here { lat, lon } => {
                let config = Config::load()?;
                show(&config, LocationQuery::Position(Coordinates { lat, lon })).await
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key_prompt = Text::new("OpenWeatherMap API key:");
    let key_prompt = match config.api_key.as_deref() {
        Some(existing) => key_prompt.with_initial_value(existing),
        None => key_prompt,
    };
    let api_key = key_prompt.prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city (empty keeps the built-in default):")
        .with_initial_value(config.default_city.as_deref().unwrap_or(""))
        .prompt()?;
    config.set_default_city(Some(city));

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(config: &Config, query: LocationQuery) -> Result<()> {
    let provider = provider_from_config(config)?;

    debug!("Loading dashboard for {query:?}");
    match load_dashboard(&provider, &query).await {
        Ok(dashboard) => {
            print_dashboard(&dashboard);
            Ok(())
        }
        // An unknown city is a rendered outcome, not a crash.
        Err(err) if err.downcast_ref::<FetchError>().is_some_and(is_not_found) => {
            print!("{}", render::not_found_panel());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn is_not_found(err: &FetchError) -> bool {
    matches!(err, FetchError::NotFound(_))
}

fn print_dashboard(dashboard: &Dashboard) {
    let now = Local::now();
    let offset = dashboard.current.utc_offset_secs;

    print!(
        "{}",
        render::current_panel(&dashboard.current, now.date_naive(), now.time())
    );
    println!();
    print!("{}", render::daily_panel(&dashboard.daily, offset));
    println!();
    print!("{}", render::hourly_panel(&dashboard.hourly, offset));
    println!();
    print!("{}", render::air_panel(dashboard.air.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_and_without_a_city() {
        let cli = Cli::try_parse_from(["skycast", "show", "Kyiv"]).unwrap();
        assert!(matches!(cli.command, Command::Show { city: Some(c) } if c == "Kyiv"));

        let cli = Cli::try_parse_from(["skycast", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { city: None }));
    }

    #[test]
    fn parses_coordinates_including_negative_ones() {
        let cli =
            Cli::try_parse_from(["skycast", "here", "--lat", "-33.87", "--lon", "151.21"])
                .unwrap();
        match cli.command {
            Command::Here { lat, lon } => {
                assert!((lat + 33.87).abs() < 1e-9);
                assert!((lon - 151.21).abs() < 1e-9);
            }
            other => panic!("expected Here, got {other:?}"),
        }
    }

    #[test]
    fn here_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["skycast", "here", "--lat", "1.0"]).is_err());
    }
}
