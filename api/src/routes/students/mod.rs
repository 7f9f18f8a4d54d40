//! # students Routes Module
//!
//! Defines and wires up routes for the `/students` endpoint group.
//!
//! - `post.rs` — registration, login and leave-request creation
//! - `get.rs` — student lookup and listings
//! - `put.rs` — counselor assignment

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;

use get::{get_student, list_leave_requests, list_students};
use post::{create_leave_request, login, register};
use put::assign_counselor;

/// Builds the `/students` route group.
///
/// - `POST /students/register` → `register`
/// - `POST /students/login` → `login`
/// - `GET /students` → `list_students`
/// - `GET /students/{roll_number}` → `get_student`
/// - `PUT /students/{roll_number}/assign-counselor` → `assign_counselor`
/// - `POST /students/{roll_number}/leave-requests` → `create_leave_request`
/// - `GET /students/{roll_number}/leave-requests` → `list_leave_requests`
pub fn student_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(list_students))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/{roll_number}", get(get_student))
        .route("/{roll_number}/assign-counselor", put(assign_counselor))
        .route(
            "/{roll_number}/leave-requests",
            post(create_leave_request).get(list_leave_requests),
        )
}
