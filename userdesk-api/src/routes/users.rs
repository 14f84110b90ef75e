/// User resource endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create user (validated), 201
/// - `GET /users` - List users
/// - `GET /users/:id` - Fetch one user
/// - `PATCH /users/:id` - Partial update (validated)
/// - `DELETE /users/:id` - Delete user, 204 with empty body
///
/// Non-numeric `:id` segments are rejected by `UserId` before any handler
/// runs, so they never reach the store.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{JsonBody, UserId},
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use userdesk_shared::{
    models::user::User,
    validation::{validate_create, validate_update},
};

fn user_not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("User with ID {} not found", id))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "phone": "555-0100"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed JSON or validation failed
/// - `500 Internal Server Error`: Storage failure
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> ApiResult<(StatusCode, Json<User>)> {
    let data = validate_create(payload)?;

    let user = state.store.create(data).await?;
    info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users, ordered by ID
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// Fetch one user by ID
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not an integer
/// - `404 Not Found`: No user with this ID
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Json<User>> {
    let user = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok(Json(user))
}

/// Apply a partial update
///
/// Only the fields present in the body change; everything else keeps its
/// current value. An empty body returns the user unchanged.
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not an integer, malformed JSON, or
///   validation failed
/// - `404 Not Found`: No user with this ID
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody,
) -> ApiResult<Json<User>> {
    let changes = validate_update(payload)?;

    let user = state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// Delete a user
///
/// Responds `204 No Content` with an empty body.
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not an integer
/// - `404 Not Found`: No user with this ID
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<StatusCode> {
    if !state.store.delete(id).await? {
        return Err(user_not_found(id));
    }
    info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
