//! Assembles one dashboard refresh from the individual provider calls.

use anyhow::Result;
use tracing::warn;

use crate::{
    forecast::{daily_outlook, hourly_outlook},
    model::{Dashboard, LocationQuery},
    provider::WeatherProvider,
};

/// Run a full fetch cycle for `query`.
///
/// Current conditions and the forecast load concurrently and both must
/// succeed. Air quality and (for coordinate queries) reverse geocoding are
/// best-effort: on failure the dashboard still renders, with the sample
/// missing or the API-reported place name kept.
pub async fn load_dashboard(
    provider: &dyn WeatherProvider,
    query: &LocationQuery,
) -> Result<Dashboard> {
    let (mut current, list) =
        tokio::try_join!(provider.current(query), provider.forecast(query))?;

    let air = match provider.air_quality(current.coord).await {
        Ok(sample) => Some(sample),
        Err(err) => {
            warn!("Air quality fetch failed: {err:#}");
            None
        }
    };

    if let LocationQuery::Position(coord) = query {
        match provider.reverse_geocode(*coord).await {
            Ok(Some(place)) => {
                current.city = place.name;
                current.country = place.country;
            }
            Ok(None) => {
                warn!("Reverse geocoding returned no result for {}", coord.label());
            }
            Err(err) => {
                warn!("Reverse geocoding failed: {err:#}");
            }
        }
        if current.city.is_empty() {
            current.city = coord.label();
        }
    }

    Ok(Dashboard {
        daily: daily_outlook(&list),
        hourly: hourly_outlook(&list),
        current,
        air,
    })
}
