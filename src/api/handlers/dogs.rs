//! Handlers for dog endpoints.

use axum::{Json, extract::State};

use crate::api::dto::dog::{CreateDogRequest, DogResponse, UpdateDogRequest};
use crate::api::dto::message::MessageResponse;
use crate::api::extract::{PathParams, ValidatedJson};
use crate::application::services::DELETE_SUCCESS_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered dog.
///
/// # Endpoint
///
/// `GET /api/dogs`
pub async fn list_dogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogResponse>>, AppError> {
    let dogs = state.dog_service.list_dogs().await?;

    Ok(Json(dogs.into_iter().map(DogResponse::from).collect()))
}

/// Lists dogs that have been adopted.
///
/// # Endpoint
///
/// `GET /api/dogs/is_adopted`
pub async fn list_adopted_dogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogResponse>>, AppError> {
    let dogs = state.dog_service.list_adopted_dogs().await?;

    Ok(Json(dogs.into_iter().map(DogResponse::from).collect()))
}

/// Returns the dog registered under `name`.
///
/// # Endpoint
///
/// `GET /api/dogs/{name}`
///
/// # Errors
///
/// Returns 404 if no dog has this name.
pub async fn get_dog_handler(
    PathParams(name): PathParams<String>,
    State(state): State<AppState>,
) -> Result<Json<DogResponse>, AppError> {
    let dog = state.dog_service.get_dog(&name).await?;

    Ok(Json(dog.into()))
}

/// Registers a new dog.
///
/// # Endpoint
///
/// `POST /api/dogs/created`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Rex",
///   "picture": "http://x/rex.png",
///   "is_adopted": false,
///   "create_date": "2024-01-01T12:00:00Z",  // optional, defaults to now
///   "id_user": 1                            // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a dog with the same name is already registered.
/// Returns 422 if validation fails.
pub async fn create_dog_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDogRequest>,
) -> Result<Json<DogResponse>, AppError> {
    let dog = state.dog_service.create_dog(payload.into()).await?;

    Ok(Json(dog.into()))
}

/// Overwrites picture, adoption flag, creation date and owner of a dog.
///
/// # Endpoint
///
/// `PUT /api/dogs/{name}`
///
/// The name itself cannot be changed through this endpoint.
///
/// # Errors
///
/// Returns 400 if no dog has this name.
/// Returns 422 if validation fails.
pub async fn update_dog_handler(
    PathParams(name): PathParams<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateDogRequest>,
) -> Result<Json<DogResponse>, AppError> {
    let dog = state.dog_service.update_dog(&name, payload.into()).await?;

    Ok(Json(dog.into()))
}

/// Removes a dog.
///
/// # Endpoint
///
/// `DELETE /api/dogs/{name}`
///
/// # Errors
///
/// Returns 400 if no dog has this name.
pub async fn delete_dog_handler(
    PathParams(name): PathParams<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.dog_service.delete_dog(&name).await?;

    Ok(Json(MessageResponse::new(DELETE_SUCCESS_MESSAGE)))
}
