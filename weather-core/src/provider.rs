use crate::{
    Config, Location, Observation,
    error::{SearchError, Service},
    provider::{forecast::OpenMeteoForecast, geocoding::OpenMeteoGeocoder},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

pub mod forecast;
pub mod geocoding;

/// Turns free-text city names into a single best-match [`Location`].
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Location, SearchError>;
}

/// Fetches current conditions for a coordinate.
#[async_trait]
pub trait ObservationFetcher: Send + Sync + Debug {
    async fn fetch_current(&self, latitude: f64, longitude: f64)
    -> Result<Observation, SearchError>;
}

/// Build the Open-Meteo geocoder and forecast client sharing one HTTP client.
pub fn open_meteo_from_config(
    config: &Config,
) -> anyhow::Result<(OpenMeteoGeocoder, OpenMeteoForecast)> {
    let http = Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("weather-now/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    Ok((
        OpenMeteoGeocoder::new(http.clone(), config.geocoding_url.clone()),
        OpenMeteoForecast::new(http, config.forecast_url.clone()),
    ))
}

/// Issue one GET and decode the JSON body.
///
/// Transport failures, non-success statuses and undecodable bodies all become
/// [`SearchError::Network`] for `service`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    service: Service,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, SearchError> {
    tracing::debug!(%service, url, ?query, "sending request");

    let res = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| SearchError::network(service, format!("request failed: {e}")))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| SearchError::network(service, format!("failed to read body: {e}")))?;

    if !status.is_success() {
        tracing::warn!(%service, %status, "non-success response");
        return Err(SearchError::network(
            service,
            format!("status {}: {}", status, truncate_body(&body)),
        ));
    }

    serde_json::from_str(&body).map_err(|e| {
        SearchError::network(service, format!("invalid JSON ({e}): {}", truncate_body(&body)))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);
    }

    #[test]
    fn builds_clients_from_default_config() {
        assert!(open_meteo_from_config(&Config::default()).is_ok());
    }
}
