//! Map page and advice API routes.

use advice_core::CountryAdvice;
use askama::Template;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::Result;
use crate::geo;
use crate::state::AppState;

/// Choropleth map page template.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    /// Joined GeoJSON feature collection, serialized for the page script.
    pub map_data: String,
}

/// Render the choropleth map page.
///
/// Boundaries are re-fetched and re-joined on every request; nothing is
/// cached between requests.
pub async fn map_page(State(state): State<AppState>) -> Result<MapTemplate> {
    let boundaries = geo::fetch_boundaries(&state.http, &state.boundaries_url).await?;
    info!("Map data loaded");

    let joined = geo::join_boundaries(&boundaries, &state.advice)?;
    info!("Map data combined");

    Ok(MapTemplate {
        map_data: serde_json::to_string(&joined)?,
    })
}

/// Get the assembled advice rows as JSON.
pub async fn advice_api(State(state): State<AppState>) -> Json<Vec<CountryAdvice>> {
    Json(state.advice.as_ref().clone())
}
