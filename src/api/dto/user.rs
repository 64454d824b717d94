//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::dog::DogResponse;
use crate::domain::entities::{NewUser, UserUpdate, UserWithDogs};

/// Request body for `POST /api/user/create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 40))]
    pub name: String,

    #[validate(length(min = 1, max = 40))]
    pub last_name: String,

    pub email: String,
}

/// Request body for `PUT /api/user/update/{id}`. Same shape as creation.
pub type UpdateUserRequest = CreateUserRequest;

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        NewUser {
            name: r.name,
            last_name: r.last_name,
            email: r.email,
        }
    }
}

impl From<CreateUserRequest> for UserUpdate {
    fn from(r: CreateUserRequest) -> Self {
        UserUpdate {
            name: r.name,
            last_name: r.last_name,
            email: r.email,
        }
    }
}

/// JSON representation of a user with the dogs it owns.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub dogs: Vec<DogResponse>,
}

impl From<UserWithDogs> for UserResponse {
    fn from(u: UserWithDogs) -> Self {
        UserResponse {
            id: u.user.id,
            name: u.user.name,
            last_name: u.user.last_name,
            email: u.user.email,
            dogs: u.dogs.into_iter().map(DogResponse::from).collect(),
        }
    }
}
