//! Application state shared across handlers.

use std::sync::Arc;

use advice_core::CountryAdvice;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Map-ready advice rows, built once at startup.
    pub advice: Arc<Vec<CountryAdvice>>,
    /// Country-boundary GeoJSON URL, fetched per request.
    pub boundaries_url: String,
    /// HTTP client for boundary fetches.
    pub http: reqwest::Client,
}

impl AppState {
    /// Create new application state.
    pub fn new(advice: Vec<CountryAdvice>, boundaries_url: String) -> Self {
        Self {
            advice: Arc::new(advice),
            boundaries_url,
            http: reqwest::Client::new(),
        }
    }
}
