//! Business logic services for the application layer.

pub mod dog_service;
pub mod user_service;

pub use dog_service::DogService;
pub use user_service::UserService;

/// Confirmation message returned after a successful delete.
pub const DELETE_SUCCESS_MESSAGE: &str = "Eliminación exitosa";
