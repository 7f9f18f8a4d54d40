use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use sea_orm::DatabaseConnection;

/// Builds the `/health` route group: a single `GET /health` endpoint used
/// for uptime checks and deployment probes.
pub fn health_routes() -> Router<DatabaseConnection> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Returns a simple success response to indicate the API is running.
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
