//! Repository trait for user records.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// Dogs are not loaded here; owners are resolved through
/// [`crate::domain::repositories::DogRepository::find_by_owners`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with its assigned id.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Lists every user ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Overwrites name, last name and email of a user. Returns `Ok(None)`
    /// if no user has this id.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Deletes a user. Dogs it owned keep existing with no owner.
    ///
    /// Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts users.
    async fn count(&self) -> Result<i64, AppError>;
}
