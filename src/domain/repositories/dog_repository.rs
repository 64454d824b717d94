//! Repository trait for dog records.

use crate::domain::entities::{Dog, DogUpdate, NewDog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for dogs.
///
/// Lookups by name return the lowest-id match, since the store does not
/// enforce unique names.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Inserts a new dog and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `id_user` references a missing user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError>;

    /// Lists every dog ordered by id.
    async fn list(&self) -> Result<Vec<Dog>, AppError>;

    /// Lists dogs with `is_adopted = true`, ordered by id.
    async fn list_adopted(&self) -> Result<Vec<Dog>, AppError>;

    /// Finds a dog by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError>;

    /// Lists the dogs owned by any of the given users, ordered by id.
    async fn find_by_owners(&self, user_ids: &[i64]) -> Result<Vec<Dog>, AppError>;

    /// Overwrites picture, adoption flag, creation date and owner of a dog.
    /// Returns `Ok(None)` if no dog has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `id_user` references a missing user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: DogUpdate) -> Result<Option<Dog>, AppError>;

    /// Deletes a dog. Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts dogs, optionally only adopted ones.
    async fn count(&self, only_adopted: bool) -> Result<i64, AppError>;
}
