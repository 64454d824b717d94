//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgDogRepository`] - Dog storage, filtering and owner lookups
//! - [`PgUserRepository`] - User storage

pub mod pg_dog_repository;
pub mod pg_user_repository;

pub use pg_dog_repository::PgDogRepository;
pub use pg_user_repository::PgUserRepository;
