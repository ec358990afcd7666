//! Core library for the `weather-now` tool.
//!
//! This crate defines:
//! - Lookup tables for weather codes, wind bearings and UV readings
//! - Geocoding and current-conditions clients (Open-Meteo)
//! - The search pipeline and its observable state
//! - Configuration handling
//!
//! It is used by `weather-now-cli`, but any other front end can drive
//! [`SearchPipeline`] and render its [`SearchState`].

pub mod codes;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use codes::{UvCategory, UvSeverity, WeatherIcon};
pub use config::Config;
pub use error::{ErrorKind, SearchError, Service};
pub use history::RecentSearches;
pub use model::{Location, Observation, WeatherView};
pub use pipeline::{SearchPipeline, SearchState, SearchStatus, SearchSuccess};
pub use provider::{LocationResolver, ObservationFetcher};
