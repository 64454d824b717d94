//! Core domain entities representing the adoption registry.
//!
//! # Entity Types
//!
//! - [`Dog`] - A dog available for (or already given in) adoption
//! - [`User`] - A person who may own dogs
//! - [`UserWithDogs`] - A user together with the dogs that reference it
//!
//! # Design Pattern
//!
//! Persisted records have separate input structs:
//! - `NewDog`, `NewUser` - For inserting new records
//! - `DogUpdate`, `UserUpdate` - For full-field overwrites of existing records

pub mod dog;
pub mod user;

pub use dog::{Dog, DogUpdate, NewDog};
pub use user::{NewUser, User, UserUpdate, UserWithDogs};
