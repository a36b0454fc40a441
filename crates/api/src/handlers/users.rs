//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::types::DbId;
use inventory_db::models::user::{CreateUser, UpdateUser};

use crate::error::AppResult;
use crate::response::{ActionResponse, DataResponse};
use crate::state::AppState;

/// GET /api/v1/users
///
/// List all users, newest first.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = state.users.list().await?;

    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state.users.get_by_id(user_id).await?;

    Ok(Json(DataResponse { data: user }))
}

/// POST /api/v1/users
///
/// Returns 409 if the email is already in use.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.users.create(&input).await?;

    tracing::info!(user_id = user.id, email = %user.email, "User created");

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse {
            data: user,
            message: "User created",
        }),
    ))
}

/// PUT /api/v1/users/{id}
///
/// Partially update a user. Omitted fields are left as they are; a body with
/// no recognised fields is rejected with 400.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.users.update_partial(user_id, &input).await?;

    tracing::info!(user_id, "User updated");

    Ok(Json(ActionResponse {
        data: user,
        message: "User updated",
    }))
}

/// DELETE /api/v1/users/{id}
///
/// Responds with the row as it was before deletion.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state.users.delete_by_id(user_id).await?;

    tracing::info!(user_id, "User deleted");

    Ok(Json(ActionResponse {
        data: user,
        message: "User deleted",
    }))
}
