//! REST API routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::dashboard;
use crate::state::AppState;

const SERVICE_NAME: &str = "La Chica del Clima API";

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/health", get(health_check))
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub lat: f64,
    pub lon: f64,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    if !query.lat.is_finite() || !query.lon.is_finite() {
        return bad_request("Latitude and longitude must be finite numbers");
    }

    match dashboard::build_dashboard(&state, query.lat, query.lon).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
