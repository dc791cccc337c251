//! Core types and dataset pipeline for the foreign travel advice map.
//!
//! This crate provides the shared interface between the content source and
//! the web map. It defines:
//!
//! - [`AdviceSource`] - The trait content providers implement
//! - [`AdvisoryIndex`] / [`CountryContent`] - Source-side content types
//! - [`AdviceDataset`] / [`CountryAdvice`] - The assembled tabular dataset
//! - [`CountryAliases`] - Country-name rewriting between naming schemes
//! - [`extract_covid_requirements`] - The entry-requirements extractor
//! - [`AdviceError`] - Error types for source and pipeline operations
//!
//! # Example
//!
//! ```rust
//! use advice_core::{async_trait, AdviceError, AdviceSource, AdvisoryIndex, CountryContent};
//!
//! struct EmptySource;
//!
//! #[async_trait]
//! impl AdviceSource for EmptySource {
//!     async fn advisory_index(&self) -> Result<AdvisoryIndex, AdviceError> {
//!         Ok(AdvisoryIndex::new())
//!     }
//!
//!     async fn country_content(&self, url: &str) -> Result<CountryContent, AdviceError> {
//!         Err(AdviceError::MalformedUrl(url.to_string()))
//!     }
//! }
//! ```

mod aliases;
mod dataset;
mod error;
mod extract;
mod pipeline;
mod source;

pub use aliases::CountryAliases;
pub use dataset::{
    assemble_map_rows, AdviceDataset, CountryAdvice, CountryRow, ENTRY_REQUIREMENTS_SECTION,
};
pub use error::AdviceError;
pub use extract::{extract_covid_requirements, NO_ENTRY_RULES};
pub use pipeline::build_advice_dataset;
pub use source::{AdviceSource, AdvisoryIndex, ContentPart, CountryContent};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
