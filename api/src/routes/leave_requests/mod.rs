//! # leave-requests Routes Module
//!
//! Counselor-scoped view of the leave-request ledger.

pub mod get;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;

use get::list_leave_requests;

/// Builds the `/leave-requests` route group.
///
/// - `GET /leave-requests?counselor_id=N` → `list_leave_requests`
pub fn leave_request_routes() -> Router<DatabaseConnection> {
    Router::new().route("/", get(list_leave_requests))
}
