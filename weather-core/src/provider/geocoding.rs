use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{SearchError, Service},
    model::Location,
};

use super::{LocationResolver, get_json};

/// Open-Meteo geocoding search, asking for the single best English match.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, url: String) -> Self {
        Self { http, url }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    admin1: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl From<GeoResult> for Location {
    fn from(r: GeoResult) -> Self {
        Location {
            name: r.name,
            country: r.country.unwrap_or_default(),
            region: r.admin1.unwrap_or_default(),
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

#[async_trait]
impl LocationResolver for OpenMeteoGeocoder {
    async fn resolve(&self, city: &str) -> Result<Location, SearchError> {
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let parsed: GeoResponse = get_json(&self.http, Service::Geocoding, &self.url, &query).await?;

        let Some(first) = parsed.results.and_then(|r| r.into_iter().next()) else {
            tracing::warn!(city, "no geocoding results");
            return Err(SearchError::not_found(city));
        };

        let location = Location::from(first);
        tracing::debug!(
            name = %location.name,
            lat = location.latitude,
            lon = location.longitude,
            "resolved location"
        );
        Ok(location)
    }
}
