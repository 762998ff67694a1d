//! API routes for the dashboard server.

mod routes;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::state::AppState>> {
    routes::create_router()
}
