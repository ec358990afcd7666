use thiserror::Error;

/// Remote service a search talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Geocoding,
    Weather,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Geocoding => "geocoding",
            Service::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
}

/// Terminal failure of one search attempt.
///
/// `Display` yields the message shown to the user; `reason` on network
/// failures carries the technical detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{}", network_message(*service))]
    Network { service: Service, reason: String },

    #[error("City \"{query}\" not found. Please try a different city name.")]
    NotFound { query: String },
}

impl SearchError {
    pub fn network(service: Service, reason: impl Into<String>) -> Self {
        SearchError::Network { service, reason: reason.into() }
    }

    pub fn not_found(query: impl Into<String>) -> Self {
        SearchError::NotFound { query: query.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Network { .. } => ErrorKind::Network,
            SearchError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn network_message(service: Service) -> &'static str {
    match service {
        Service::Geocoding => {
            "Failed to fetch location data. Please check your internet connection."
        }
        Service::Weather => {
            "Failed to fetch weather data. The weather service may be temporarily unavailable."
        }
    }
}
