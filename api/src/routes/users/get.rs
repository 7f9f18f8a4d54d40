use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use db::models::user;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use services::error::ServiceError;

use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, error_response};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

/// GET /users
///
/// List staff users, optionally filtered by exact role.
///
/// ### Examples
/// ```http
/// GET /users
/// GET /users?role=counselor
/// ```
///
/// ### Responses
/// - `200 OK` + list of users
/// - `500 Internal Server Error`
pub async fn list_users(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    let mut condition = Condition::all();

    if let Some(role) = &query.role {
        condition = condition.add(user::Column::Role.eq(role.as_str()));
    }

    match user::Entity::find().filter(condition).all(&db).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            Json(ApiResponse::success(users, "Users retrieved successfully")).into_response()
        }
        Err(e) => error_response(ServiceError::Store(e)),
    }
}
