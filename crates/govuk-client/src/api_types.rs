//! gov.uk content API response types.
//!
//! Only the fields the pipeline reads are modeled; the API returns far
//! more. Unknown fields are ignored by serde, a missing modeled field is
//! a decode failure.

use serde::Deserialize;

/// Root content-index document for foreign travel advice.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentIndex {
    pub links: IndexLinks,
}

/// Link collections of the index document.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexLinks {
    /// One entry per country advisory.
    pub children: Vec<ChildLink>,
}

/// One per-country entry of the content index.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildLink {
    /// Content API URL of the country's advisory document.
    pub api_url: String,
    pub details: ChildDetails,
}

/// Details block of an index entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildDetails {
    pub country: Country,
}

/// Country descriptor embedded in content details.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: String,
}

/// A country's advisory content document.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryDocument {
    pub details: CountryDetails,
}

/// Details block of an advisory document.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryDetails {
    pub country: Country,
    /// Named content sections in document order.
    pub parts: Vec<Part>,
}

/// One named section of an advisory document.
#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub slug: String,
    /// Raw HTML body of the section.
    pub body: String,
}
