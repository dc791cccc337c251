//! gov.uk content API client.

use advice_core::{
    async_trait, AdviceError, AdviceSource, AdvisoryIndex, ContentPart, CountryContent,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api_types::{ContentIndex, CountryDocument};
use crate::config::GovUkConfig;

/// Client for the gov.uk content API.
///
/// One request per country, issued in caller order. No retry; no timeout
/// beyond reqwest defaults.
pub struct GovUkClient {
    client: Client,
    config: GovUkConfig,
}

impl GovUkClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GovUkConfig) -> Result<Self, AdviceError> {
        let client = Client::builder().build().map_err(|e| {
            AdviceError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a client configured from environment variables.
    ///
    /// See [`GovUkConfig::from_env`].
    pub fn from_env() -> Result<Self, AdviceError> {
        Self::new(GovUkConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GovUkConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AdviceError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AdviceError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdviceError::Network(format!(
                "Request to {} returned status {}",
                url,
                status.as_u16()
            )));
        }

        response.json().await.map_err(|e| {
            AdviceError::Decode(format!("Failed to decode response from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl AdviceSource for GovUkClient {
    async fn advisory_index(&self) -> Result<AdvisoryIndex, AdviceError> {
        let url = Url::parse(&self.config.index_url).map_err(|e| {
            AdviceError::Configuration(format!(
                "Invalid index URL {}: {}",
                self.config.index_url, e
            ))
        })?;

        let index: ContentIndex = self.get_json(url).await?;

        let mut advisory_index = AdvisoryIndex::new();
        for child in index.links.children {
            debug!(url = %child.api_url, "Index entry");
            advisory_index.insert(child.details.country.name, child.api_url);
        }

        Ok(advisory_index)
    }

    async fn country_content(&self, url: &str) -> Result<CountryContent, AdviceError> {
        let url = Url::parse(url).map_err(|_| AdviceError::MalformedUrl(url.to_string()))?;

        let document: CountryDocument = self.get_json(url).await?;

        let parts = document
            .details
            .parts
            .into_iter()
            .map(|part| ContentPart {
                slug: part.slug,
                body: part.body,
            })
            .collect();

        Ok(CountryContent {
            name: document.details.country.name,
            parts,
        })
    }
}
