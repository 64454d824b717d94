//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dogs;
pub mod health;
pub mod home;
pub mod users;

pub use dogs::{
    create_dog_handler, delete_dog_handler, get_dog_handler, list_adopted_dogs_handler,
    list_dogs_handler, update_dog_handler,
};
pub use health::health_handler;
pub use home::home_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
