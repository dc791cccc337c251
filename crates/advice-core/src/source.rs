//! Trait and content types for advisory providers.

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::AdviceError;

/// Ordered mapping from country name to advisory content URL.
///
/// Iteration order is the order entries appeared in the content index,
/// which is also the order countries are fetched in.
pub type AdvisoryIndex = IndexMap<String, String>;

/// One named section of advisory content.
#[derive(Debug, Clone)]
pub struct ContentPart {
    /// Section identifier, e.g. `entry-requirements`.
    pub slug: String,
    /// Raw HTML body of the section.
    pub body: String,
}

/// A country's advisory content as returned by a source.
#[derive(Debug, Clone)]
pub struct CountryContent {
    /// Canonical country name from the content body; may differ from the
    /// index key the URL was looked up under.
    pub name: String,
    /// Named content sections in document order.
    pub parts: Vec<ContentPart>,
}

/// A provider of travel-advisory content.
///
/// The production implementation fetches from the gov.uk content API;
/// tests substitute an in-memory source.
#[async_trait]
pub trait AdviceSource {
    /// Retrieve the advisory index mapping country names to content URLs.
    ///
    /// Any failure here is fatal: without an index there is nothing for
    /// the rest of the pipeline to do.
    async fn advisory_index(&self) -> Result<AdvisoryIndex, AdviceError>;

    /// Retrieve one country's advisory content.
    ///
    /// Must fail with [`AdviceError::MalformedUrl`] when `url` is not a
    /// well-formed absolute URL; the pipeline recovers from that variant
    /// only and treats every other error as fatal.
    async fn country_content(&self, url: &str) -> Result<CountryContent, AdviceError>;
}
