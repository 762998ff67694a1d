//! Error taxonomy for the dashboard pipeline.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// The closed set of failure kinds the pipeline distinguishes.
///
/// `ProviderUnavailable` is constructed and recovered inside the gateway
/// (it surfaces as missing fields, never as an error response).
/// `Computation` is recovered at the orchestrator boundary with the
/// fallback payload. The `IntoResponse` mapping below only fires for the
/// defensive case of a failure escaping both recovery layers.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("dashboard computation failed: {0}")]
    Computation(String),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DashboardError::ProviderUnavailable(_) => (
                StatusCode::BAD_GATEWAY,
                "Error al conectar con las APIs externas.",
            ),
            DashboardError::Computation(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor")
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_bad_gateway() {
        let response = DashboardError::ProviderUnavailable("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn computation_errors_map_to_internal_error() {
        let response = DashboardError::Computation("non-finite".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
