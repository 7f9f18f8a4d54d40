//! # users Routes Module
//!
//! Defines and wires up routes for the `/users` endpoint group.
//!
//! - `post.rs` — staff registration and login
//! - `get.rs` — listing with optional role filter

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

use get::list_users;
use post::{login, register};

/// Builds the `/users` route group.
///
/// - `POST /users/register` → `register`
/// - `POST /users/login` → `login`
/// - `GET /users` → `list_users`
pub fn user_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/", get(list_users))
        .route("/register", post(register))
        .route("/login", post(login))
}
