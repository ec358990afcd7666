use chrono::{DateTime, Utc};

use crate::codes::{self, UvCategory, WeatherIcon};

/// Best geocoding match for a searched city.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// First-level administrative region; empty when the geocoder has none.
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temperature_c: i32,
    pub apparent_temperature_c: i32,
    pub humidity_pct: i32,
    pub wind_speed_kmh: i32,
    pub wind_direction_deg: Option<i32>,
    pub uv_index: Option<f64>,
    pub weather_code: i32,
}

/// Everything the presentation layer needs to draw one weather card.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub region: String,
    pub country: String,
    pub temperature_c: i32,
    pub apparent_temperature_c: i32,
    pub humidity_pct: i32,
    pub wind_speed_kmh: i32,
    pub wind_direction_deg: Option<i32>,
    pub uv_index: Option<f64>,
    pub weather_code: i32,
    pub captured_at: DateTime<Utc>,
}

impl WeatherView {
    pub fn new(location: Location, observation: Observation, captured_at: DateTime<Utc>) -> Self {
        Self {
            city: location.name,
            region: location.region,
            country: location.country,
            temperature_c: observation.temperature_c,
            apparent_temperature_c: observation.apparent_temperature_c,
            humidity_pct: observation.humidity_pct,
            wind_speed_kmh: observation.wind_speed_kmh,
            wind_direction_deg: observation.wind_direction_deg,
            uv_index: observation.uv_index,
            weather_code: observation.weather_code,
            captured_at,
        }
    }

    pub fn icon(&self) -> WeatherIcon {
        codes::icon_for(self.weather_code)
    }

    pub fn description(&self) -> &'static str {
        codes::description_for(self.weather_code)
    }

    pub fn compass(&self) -> &'static str {
        codes::compass_label_for(self.wind_direction_deg)
    }

    pub fn uv_category(&self) -> UvCategory {
        codes::uv_category_for(self.uv_index)
    }

    /// Line under the city name: `"Region, Country"` or just the country.
    pub fn place_line(&self) -> String {
        if self.region.is_empty() {
            self.country.clone()
        } else {
            format!("{}, {}", self.region, self.country)
        }
    }

    /// `"City, Region, Country"`, or `"City, Country"` without a region.
    pub fn recency_label(&self) -> String {
        if self.region.is_empty() {
            format!("{}, {}", self.city, self.country)
        } else {
            format!("{}, {}, {}", self.city, self.region, self.country)
        }
    }
}

/// Round to the nearest integer with halves going towards positive infinity,
/// so 15.5 becomes 16 and -2.5 becomes -2.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn round_to_i32(value: f64) -> i32 {
    round_half_up(value) as i32
}
