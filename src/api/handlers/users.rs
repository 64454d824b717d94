//! Handlers for user endpoints.

use axum::{Json, extract::State};

use crate::api::dto::message::MessageResponse;
use crate::api::extract::{PathParams, ValidatedJson};
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::application::services::DELETE_SUCCESS_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/user/create`
///
/// Dogs are assigned to users from the dog endpoints (`id_user`), so a new
/// user is always returned with an empty `dogs` list.
///
/// # Errors
///
/// Returns 422 if validation fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.create_user(payload.into()).await?;

    Ok(Json(user.into()))
}

/// Lists every user with its dogs.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Returns a user with its dogs.
///
/// # Endpoint
///
/// `GET /api/user/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    PathParams(id): PathParams<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Overwrites name, last name and email of a user.
///
/// # Endpoint
///
/// `PUT /api/user/update/{id}`
///
/// # Errors
///
/// Returns 400 if the user does not exist.
/// Returns 422 if validation fails.
pub async fn update_user_handler(
    PathParams(id): PathParams<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.update_user(id, payload.into()).await?;

    Ok(Json(user.into()))
}

/// Deletes a user. Its dogs remain registered without an owner.
///
/// # Endpoint
///
/// `DELETE /api/user/delete/{id}`
///
/// # Errors
///
/// Returns 400 if the user does not exist.
pub async fn delete_user_handler(
    PathParams(id): PathParams<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse::new(DELETE_SUCCESS_MESSAGE)))
}
