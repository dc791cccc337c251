//! Route handlers for the travel advice map.

pub mod health;
pub mod map;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(map::map_page))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/advice", get(map::advice_api))
}
