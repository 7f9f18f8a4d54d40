use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use services::identity::{IdentityService, RegisterUser};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, error_response};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// POST /users/register
///
/// Register a staff user. The role string is stored as given; it is only
/// enforced later, at counselor assignment.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Carol Dlamini",
///   "email": "carol@example.com",
///   "role": "counselor",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` + user record
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (email already registered)
/// - `500 Internal Server Error`
pub async fn register(
    State(db): State<DatabaseConnection>,
    Json(req): Json<RegisterUserRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    match IdentityService::register_user(
        &db,
        RegisterUser {
            name: req.name,
            email: req.email,
            role: req.role,
            password: req.password,
        },
    )
    .await
    {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User registered successfully",
            )),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct UserLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct UserLoginResponse {
    pub user_id: i64,
    pub role: String,
}

/// POST /users/login
///
/// Authenticate a staff user by email. No session or token is issued; the
/// success payload carries the user id and role.
///
/// ### Responses
/// - `200 OK` + `{ "user_id": 3, "role": "counselor" }`
/// - `404 Not Found` (unknown email)
/// - `401 Unauthorized` (wrong password)
/// - `500 Internal Server Error`
pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(req): Json<UserLoginRequest>,
) -> Response {
    match IdentityService::login_user(&db, &req.email, &req.password).await {
        Ok(user) => Json(ApiResponse::success(
            UserLoginResponse {
                user_id: user.id,
                role: user.role,
            },
            "Login successful",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}
