//! gov.uk content API client for foreign travel advice.
//!
//! Implements [`advice_core::AdviceSource`] against the public gov.uk
//! content API: one request for the foreign-travel-advice index, one
//! request per country for its advisory document.

mod api_types;
mod client;
mod config;

pub use api_types::{ContentIndex, CountryDocument};
pub use client::GovUkClient;
pub use config::GovUkConfig;
