//! Dog entity.

use chrono::{DateTime, Utc};

/// A dog registered for adoption.
///
/// `name` is the human-facing key used by the lookup, update and delete
/// operations. It is unique by convention only: the service checks for an
/// existing name before inserting, the store does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub picture: String,
    pub is_adopted: bool,
    pub create_date: DateTime<Utc>,
    /// Owning user, if any.
    pub id_user: Option<i64>,
}

impl Dog {
    /// Returns true if the dog belongs to the given user.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.id_user == Some(user_id)
    }
}

/// Input data for registering a new dog.
#[derive(Debug, Clone)]
pub struct NewDog {
    pub name: String,
    pub picture: String,
    pub is_adopted: bool,
    pub create_date: DateTime<Utc>,
    pub id_user: Option<i64>,
}

/// Replacement values for an existing dog.
///
/// Every field overwrites the stored value, including `id_user: None`, which
/// clears the owner. The name is not part of the update.
#[derive(Debug, Clone)]
pub struct DogUpdate {
    pub picture: String,
    pub is_adopted: bool,
    pub create_date: DateTime<Utc>,
    pub id_user: Option<i64>,
}
