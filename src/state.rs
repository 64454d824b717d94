//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{DogService, UserService};
use crate::domain::repositories::{DogRepository, UserRepository};
use crate::infrastructure::persistence::{PgDogRepository, PgUserRepository};

/// Dog service over any repository implementation.
pub type DynDogService = DogService<dyn DogRepository>;

/// User service over any repository implementations.
pub type DynUserService = UserService<dyn UserRepository, dyn DogRepository>;

/// Services shared by all requests.
///
/// Cloning is cheap: every field is reference-counted. Repositories are
/// stored as trait objects so tests can swap PostgreSQL for another store.
#[derive(Clone)]
pub struct AppState {
    pub dog_service: Arc<DynDogService>,
    pub user_service: Arc<DynUserService>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        dog_repository: Arc<dyn DogRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            dog_service: Arc::new(DogService::new(dog_repository.clone())),
            user_service: Arc::new(UserService::new(user_repository, dog_repository)),
        }
    }

    /// Wires services over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgDogRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        )
    }
}
