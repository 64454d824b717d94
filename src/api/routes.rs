//! API route configuration.

use crate::api::handlers::{
    create_dog_handler, create_user_handler, delete_dog_handler, delete_user_handler,
    get_dog_handler, get_user_handler, list_adopted_dogs_handler, list_dogs_handler,
    list_users_handler, update_dog_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /dogs`               - List every dog
/// - `GET    /dogs/is_adopted`    - List adopted dogs
/// - `GET    /dogs/{name}`        - Get a dog by name
/// - `POST   /dogs/created`       - Register a dog
/// - `PUT    /dogs/{name}`        - Overwrite a dog
/// - `DELETE /dogs/{name}`        - Remove a dog
/// - `POST   /user/create`        - Create a user
/// - `GET    /users`              - List users with their dogs
/// - `GET    /user/{id}`          - Get a user with its dogs
/// - `PUT    /user/update/{id}`   - Overwrite a user
/// - `DELETE /user/delete/{id}`   - Delete a user
///
/// Static segments win over `{name}`, so dogs named `is_adopted` or `created`
/// cannot be addressed through the by-name endpoints.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_dogs_handler))
        .route("/dogs/is_adopted", get(list_adopted_dogs_handler))
        .route("/dogs/created", post(create_dog_handler))
        .route(
            "/dogs/{name}",
            get(get_dog_handler)
                .put(update_dog_handler)
                .delete(delete_dog_handler),
        )
        .route("/user/create", post(create_user_handler))
        .route("/users", get(list_users_handler))
        .route("/user/{id}", get(get_user_handler))
        .route("/user/update/{id}", put(update_user_handler))
        .route("/user/delete/{id}", delete(delete_user_handler))
}
