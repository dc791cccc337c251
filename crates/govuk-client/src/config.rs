//! Configuration for the gov.uk content client.

use std::env;

/// Default foreign-travel-advice content index endpoint.
pub const DEFAULT_INDEX_URL: &str = "https://www.gov.uk/api/content/foreign-travel-advice";

/// Configuration for [`crate::GovUkClient`].
#[derive(Debug, Clone)]
pub struct GovUkConfig {
    /// Content index URL.
    pub index_url: String,
}

impl Default for GovUkConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }
}

impl GovUkConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GOVUK_INDEX_URL` | Content index URL | foreign-travel-advice index |
    pub fn from_env() -> Self {
        let index_url =
            env::var("GOVUK_INDEX_URL").unwrap_or_else(|_| DEFAULT_INDEX_URL.to_string());
        Self { index_url }
    }

    /// Use a different content index URL.
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }
}
