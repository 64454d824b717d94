//! User entity and the owner view that embeds its dogs.

use super::dog::Dog;

/// A registered person.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

/// Input data for creating a user. No field is unique.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
}

/// Replacement values for an existing user.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub last_name: String,
    pub email: String,
}

/// A user with every dog whose `id_user` points at it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithDogs {
    pub user: User,
    pub dogs: Vec<Dog>,
}

impl UserWithDogs {
    /// Pairs `user` with the subset of `dogs` it owns, preserving their order.
    pub fn from_candidates(user: User, dogs: &[Dog]) -> Self {
        let owned = dogs
            .iter()
            .filter(|d| d.is_owned_by(user.id))
            .cloned()
            .collect();

        Self { user, dogs: owned }
    }
}
