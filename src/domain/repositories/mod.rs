//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DogRepository`] - Dog CRUD and owner lookups
//! - [`UserRepository`] - User CRUD
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod dog_repository;
pub mod user_repository;

pub use dog_repository::DogRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use dog_repository::MockDogRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
