//! Web map of COVID-19 entry requirements.
//!
//! Builds the foreign-travel-advice dataset once at startup, then serves
//! a Leaflet choropleth of per-country entry requirements over HTTP.

mod config;
mod error;
mod geo;
mod routes;
mod state;

use advice_core::{assemble_map_rows, build_advice_dataset, AdviceSource, CountryAliases};
use govuk_client::GovUkClient;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting travel advice map server");

    // Build the travel-advice dataset
    let client = GovUkClient::from_env()?;
    let index = client.advisory_index().await?;
    info!(countries = index.len(), "Advisory index built");

    let dataset = build_advice_dataset(&client, &index, &CountryAliases::default()).await?;
    info!(rows = dataset.len(), "Dataset built");

    let advice = assemble_map_rows(&dataset);

    // Build application state
    let state = AppState::new(advice, config.boundaries_url.clone());

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Travel advice map server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
