//! Dog registry service.

use crate::domain::entities::{Dog, DogUpdate, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub const DOG_NOT_FOUND: &str = "Perro no encontrado";
pub const DOG_ALREADY_REGISTERED: &str = "Este perro ya se encuentra registrado";
pub const DOG_NOT_REGISTERED: &str = "No se ha encontrado registro del perro ingresado";

/// Service for registering, finding, updating and removing dogs by name.
///
/// The name uniqueness check on create is a read followed by an insert with
/// no lock in between; two concurrent creates with the same name can both
/// succeed.
pub struct DogService<R: DogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DogRepository + ?Sized> DogService<R> {
    /// Creates a new dog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every registered dog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_dogs(&self) -> Result<Vec<Dog>, AppError> {
        self.repository.list().await
    }

    /// Lists dogs that have been adopted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_adopted_dogs(&self) -> Result<Vec<Dog>, AppError> {
        self.repository.list_adopted().await
    }

    /// Retrieves a dog by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no dog has this name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_dog(&self, name: &str) -> Result<Dog, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(DOG_NOT_FOUND, json!({ "name": name })))
    }

    /// Registers a new dog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a dog with the same name exists.
    /// Returns [`AppError::BadRequest`] if `id_user` references a missing user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_dog(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        if self.repository.find_by_name(&new_dog.name).await?.is_some() {
            return Err(AppError::conflict(
                DOG_ALREADY_REGISTERED,
                json!({ "name": new_dog.name }),
            ));
        }

        let dog = self.repository.create(new_dog).await?;
        tracing::info!(dog_id = dog.id, dog_name = %dog.name, "Dog registered");

        Ok(dog)
    }

    /// Overwrites every mutable field of the dog with this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if no dog has this name or if
    /// `id_user` references a missing user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_dog(&self, name: &str, update: DogUpdate) -> Result<Dog, AppError> {
        let existing = self.find_registered(name).await?;

        self.repository
            .update(existing.id, update)
            .await?
            .ok_or_else(|| AppError::bad_request(DOG_NOT_REGISTERED, json!({ "name": name })))
    }

    /// Removes the dog with this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if no dog has this name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_dog(&self, name: &str) -> Result<(), AppError> {
        let existing = self.find_registered(name).await?;

        if !self.repository.delete(existing.id).await? {
            return Err(AppError::bad_request(
                DOG_NOT_REGISTERED,
                json!({ "name": name }),
            ));
        }

        tracing::info!(dog_id = existing.id, dog_name = %name, "Dog deleted");
        Ok(())
    }

    /// Counts dogs, optionally only adopted ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_dogs(&self, only_adopted: bool) -> Result<i64, AppError> {
        self.repository.count(only_adopted).await
    }

    /// Lookup used by the write paths, where a missing dog is a bad request.
    async fn find_registered(&self, name: &str) -> Result<Dog, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::bad_request(DOG_NOT_REGISTERED, json!({ "name": name })))
    }
}
