///! Free-text address geocoding against a Nominatim search endpoint

use reqwest::Client;
use serde::Deserialize;

use super::GeoCoordinate;
use crate::config::SearchConfig;
use crate::error::GeocodeError;

/// One place in the Nominatim `format=json` answer; coordinates come as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

pub struct Geocoder {
    client: Client,
    url: String,
}

impl Geocoder {
    pub fn new(config: &SearchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.geocode_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            url: config.geocoder_url.clone(),
        })
    }

    /// Look up the best match for `address`.
    pub async fn locate(&self, address: &str) -> Result<GeoCoordinate, GeocodeError> {
        tracing::debug!("Geocoding '{}' via {}", address, self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Service(format!("HTTP {}", status)));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoResult(address.to_string()))?;

        if let Some(name) = &place.display_name {
            tracing::debug!("Geocoded to {}", name);
        }

        place_coordinate(&place)
    }
}

fn place_coordinate(place: &NominatimPlace) -> Result<GeoCoordinate, GeocodeError> {
    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|e| GeocodeError::Unexpected(format!("invalid latitude '{}': {}", place.lat, e)))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|e| GeocodeError::Unexpected(format!("invalid longitude '{}': {}", place.lon, e)))?;

    Ok(GeoCoordinate { latitude, longitude })
}
