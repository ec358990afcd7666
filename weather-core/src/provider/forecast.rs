use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{SearchError, Service},
    model::{Observation, round_to_i32},
};

use super::{ObservationFetcher, get_json};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
weather_code,wind_speed_10m,wind_direction_10m,uv_index";

/// Open-Meteo forecast endpoint, asked only for the `current` block.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, url: String) -> Self {
        Self { http, url }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: i32,
    apparent_temperature: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    #[serde(default)]
    wind_direction_10m: Option<i32>,
    #[serde(default)]
    uv_index: Option<f64>,
}

impl From<CurrentBlock> for Observation {
    fn from(c: CurrentBlock) -> Self {
        Observation {
            temperature_c: round_to_i32(c.temperature_2m),
            apparent_temperature_c: round_to_i32(c.apparent_temperature),
            humidity_pct: c.relative_humidity_2m,
            wind_speed_kmh: round_to_i32(c.wind_speed_10m),
            wind_direction_deg: c.wind_direction_10m,
            uv_index: c.uv_index,
            weather_code: c.weather_code,
        }
    }
}

#[async_trait]
impl ObservationFetcher for OpenMeteoForecast {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Observation, SearchError> {
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];

        let parsed: ForecastResponse =
            get_json(&self.http, Service::Weather, &self.url, &query).await?;

        Ok(Observation::from(parsed.current))
    }
}
