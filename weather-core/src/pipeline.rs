//! City search orchestration: geocode, fetch current conditions, assemble the
//! view and record the place in the recent-searches list.
//!
//! The pipeline owns a single [`SearchState`] record. Every transition swaps in
//! a whole new record and publishes it on a `watch` channel, so observers never
//! see a half-updated state.

use chrono::Utc;
use tokio::sync::watch;

use crate::{
    Config,
    error::SearchError,
    history::RecentSearches,
    model::WeatherView,
    provider::{self, LocationResolver, ObservationFetcher},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    /// No search has settled yet.
    #[default]
    Idle,
    Loading,
    Ready(WeatherView),
    /// Message for the user; no weather is shown alongside it.
    Failed(String),
}

impl SearchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchStatus::Loading)
    }

    pub fn view(&self) -> Option<&WeatherView> {
        match self {
            SearchStatus::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub status: SearchStatus,
    pub history: RecentSearches,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSuccess {
    pub view: WeatherView,
    pub history: RecentSearches,
}

#[derive(Debug)]
pub struct SearchPipeline {
    resolver: Box<dyn LocationResolver>,
    fetcher: Box<dyn ObservationFetcher>,
    state: watch::Sender<SearchState>,
}

impl SearchPipeline {
    pub fn new(resolver: Box<dyn LocationResolver>, fetcher: Box<dyn ObservationFetcher>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self { resolver, fetcher, state }
    }

    /// Pipeline backed by the Open-Meteo services named in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let (geocoder, forecast) = provider::open_meteo_from_config(config)?;
        Ok(Self::new(Box::new(geocoder), Box::new(forecast)))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn history(&self) -> RecentSearches {
        self.state.borrow().history.clone()
    }

    /// Receive every state the pipeline publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Run one search for `city`.
    ///
    /// Blank input is ignored: `Ok(None)` is returned, no request is made and
    /// no state is published. Otherwise the state goes to `Loading` and then
    /// settles exactly once as `Ready` or `Failed`. Failed searches keep the
    /// recent-searches list as it was.
    pub async fn search(&self, city: &str) -> Result<Option<SearchSuccess>, SearchError> {
        let city = city.trim();
        if city.is_empty() {
            tracing::debug!("ignoring blank search");
            return Ok(None);
        }

        let loading = LoadingGuard::enter(&self.state);
        let outcome = self.lookup(city).await;
        loading.disarm();
        self.settle(city, outcome)
    }

    async fn lookup(&self, city: &str) -> Result<WeatherView, SearchError> {
        let location = self.resolver.resolve(city).await?;
        let observation = self.fetcher.fetch_current(location.latitude, location.longitude).await?;
        Ok(WeatherView::new(location, observation, Utc::now()))
    }

    fn settle(
        &self,
        city: &str,
        outcome: Result<WeatherView, SearchError>,
    ) -> Result<Option<SearchSuccess>, SearchError> {
        match outcome {
            Ok(view) => {
                let label = view.recency_label();
                let mut history = RecentSearches::new();
                self.state.send_modify(|s| {
                    history = s.history.with_label(&label);
                    *s = SearchState {
                        status: SearchStatus::Ready(view.clone()),
                        history: history.clone(),
                    };
                });

                tracing::info!(query = city, %label, "search succeeded");
                Ok(Some(SearchSuccess { view, history }))
            }
            Err(err) => {
                tracing::warn!(query = city, error = ?err, "search failed");
                self.state.send_modify(|s| {
                    *s = SearchState {
                        status: SearchStatus::Failed(err.user_message()),
                        history: s.history.clone(),
                    };
                });
                Err(err)
            }
        }
    }
}

/// Publishes `Loading` on creation. If dropped while still armed (the search
/// future was cancelled), puts back the status that preceded `Loading`.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SearchState>,
    previous: Option<SearchStatus>,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a watch::Sender<SearchState>) -> Self {
        let mut previous = None;
        state.send_modify(|s| {
            previous = Some(s.status.clone());
            *s = SearchState { status: SearchStatus::Loading, history: s.history.clone() };
        });
        Self { state, previous }
    }

    fn disarm(mut self) {
        self.previous = None;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };

        tracing::debug!("search cancelled while loading");
        self.state.send_if_modified(|s| {
            if !s.status.is_loading() {
                return false;
            }
            // A cancelled search never settles; fall back to what was shown before.
            let status = if previous.is_loading() { SearchStatus::Idle } else { previous };
            *s = SearchState { status, history: s.history.clone() };
            true
        });
    }
}
