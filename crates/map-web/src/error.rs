//! Error types for the map web server.

use advice_core::AdviceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving the map.
#[derive(Debug, Error)]
pub enum MapError {
    /// Advisory or boundary data error.
    #[error("Data error: {0}")]
    Data(#[from] AdviceError),

    /// Joined map data could not be serialized for the page.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for MapError {
    fn into_response(self) -> Response {
        let message = match &self {
            MapError::Data(err) => {
                tracing::error!("Data error: {}", err);
                err.to_string()
            }
            MapError::Serialize(err) => {
                tracing::error!("Serialization error: {}", err);
                err.to_string()
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for map handlers.
pub type Result<T> = std::result::Result<T, MapError>;
