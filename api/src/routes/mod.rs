//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/students` → registration, login, lookup, counselor assignment and
//!   per-student leave requests
//! - `/users` → staff registration, login and listing
//! - `/leave-requests` → counselor-scoped leave-request listing

use axum::Router;
use sea_orm::DatabaseConnection;

pub mod common;
pub mod health;
pub mod leave_requests;
pub mod students;
pub mod users;

/// Builds the complete application router. The caller supplies the database
/// handle via `.with_state(db)`.
pub fn routes() -> Router<DatabaseConnection> {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/students", students::student_routes())
        .nest("/users", users::user_routes())
        .nest("/leave-requests", leave_requests::leave_request_routes())
}
