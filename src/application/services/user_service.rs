//! User management service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Dog, NewUser, User, UserUpdate, UserWithDogs};
use crate::domain::repositories::{DogRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

pub const USER_NOT_FOUND: &str = "Persona no encontrada";
pub const USER_NOT_REGISTERED: &str = "Usuario no encontrado";

/// Service for users and the dogs they own.
///
/// Ownership is resolved with an explicit query on `dogs.id_user` each time a
/// user is returned, so `dogs` always reflects the current store contents.
pub struct UserService<U: UserRepository + ?Sized, D: DogRepository + ?Sized> {
    user_repository: Arc<U>,
    dog_repository: Arc<D>,
}

impl<U: UserRepository + ?Sized, D: DogRepository + ?Sized> UserService<U, D> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>, dog_repository: Arc<D>) -> Self {
        Self {
            user_repository,
            dog_repository,
        }
    }

    /// Creates a user. Name and email are not checked for duplicates.
    ///
    /// A new user cannot own dogs yet, so the result has an empty `dogs` list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserWithDogs, AppError> {
        let user = self.user_repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(UserWithDogs {
            user,
            dogs: Vec::new(),
        })
    }

    /// Lists every user with its dogs.
    ///
    /// Issues two queries regardless of the number of users: one for users,
    /// one for the dogs owned by any of them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<UserWithDogs>, AppError> {
        let users = self.user_repository.list().await?;
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let mut by_owner: HashMap<i64, Vec<Dog>> = HashMap::new();
        for dog in self.dog_repository.find_by_owners(&ids).await? {
            if let Some(owner) = dog.id_user {
                by_owner.entry(owner).or_default().push(dog);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let dogs = by_owner.remove(&user.id).unwrap_or_default();
                UserWithDogs { user, dogs }
            })
            .collect())
    }

    /// Retrieves a user with its dogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<UserWithDogs, AppError> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND, json!({ "id": id })))?;

        self.with_dogs(user).await
    }

    /// Overwrites name, last name and email of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<UserWithDogs, AppError> {
        self.find_registered(id).await?;

        let user = self
            .user_repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::bad_request(USER_NOT_REGISTERED, json!({ "id": id })))?;
        self.with_dogs(user).await
    }

    /// Deletes a user. Its dogs stay registered without an owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.find_registered(id).await?;

        if !self.user_repository.delete(id).await? {
            return Err(AppError::bad_request(
                USER_NOT_REGISTERED,
                json!({ "id": id }),
            ));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Counts users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.user_repository.count().await
    }

    async fn find_registered(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::bad_request(USER_NOT_REGISTERED, json!({ "id": id })))
    }

    async fn with_dogs(&self, user: User) -> Result<UserWithDogs, AppError> {
        let dogs = self.dog_repository.find_by_owners(&[user.id]).await?;
        Ok(UserWithDogs::from_candidates(user, &dogs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockDogRepository, MockUserRepository};
    use chrono::Utc;

    fn create_test_user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            last_name: "Pérez".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn create_test_dog(id: i64, id_user: Option<i64>) -> Dog {
        Dog {
            id,
            name: format!("dog-{id}"),
            picture: String::new(),
            is_adopted: id_user.is_some(),
            create_date: Utc::now(),
            id_user,
        }
    }

    #[tokio::test]
    async fn test_create_user_has_no_dogs() {
        let mut user_repo = MockUserRepository::new();
        let dog_repo = MockDogRepository::new();

        let created = create_test_user(1, "Ana");
        user_repo
            .expect_create()
            .withf(|u| u.name == "Ana" && u.last_name == "Pérez")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let result = service
            .create_user(NewUser {
                name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                email: "ana@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.user.id, 1);
        assert!(result.dogs.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_groups_dogs_by_owner() {
        let mut user_repo = MockUserRepository::new();
        let mut dog_repo = MockDogRepository::new();

        let users = vec![create_test_user(1, "Ana"), create_test_user(2, "Luis")];
        user_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(users.clone()));

        let dogs = vec![
            create_test_dog(10, Some(2)),
            create_test_dog(11, Some(1)),
            create_test_dog(12, Some(2)),
        ];
        dog_repo
            .expect_find_by_owners()
            .withf(|ids| ids == [1, 2])
            .times(1)
            .returning(move |_| Ok(dogs.clone()));

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let result = service.list_users().await.unwrap();

        assert_eq!(result.len(), 2);
        let ana: Vec<i64> = result[0].dogs.iter().map(|d| d.id).collect();
        let luis: Vec<i64> = result[1].dogs.iter().map(|d| d.id).collect();
        assert_eq!(ana, vec![11]);
        assert_eq!(luis, vec![10, 12]);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut user_repo = MockUserRepository::new();
        let dog_repo = MockDogRepository::new();

        user_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let err = service.get_user(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user_embeds_owned_dogs() {
        let mut user_repo = MockUserRepository::new();
        let mut dog_repo = MockDogRepository::new();

        let user = create_test_user(3, "Eva");
        user_repo
            .expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let dogs = vec![create_test_dog(7, Some(3))];
        dog_repo
            .expect_find_by_owners()
            .withf(|ids| ids == [3])
            .times(1)
            .returning(move |_| Ok(dogs.clone()));

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let result = service.get_user(3).await.unwrap();

        assert_eq!(result.user.name, "Eva");
        assert_eq!(result.dogs.len(), 1);
        assert_eq!(result.dogs[0].id, 7);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_bad_request() {
        let mut user_repo = MockUserRepository::new();
        let dog_repo = MockDogRepository::new();

        user_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        user_repo.expect_update().never();

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let err = service
            .update_user(
                99,
                UserUpdate {
                    name: "X".to_string(),
                    last_name: "Y".to_string(),
                    email: "z".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.to_string(), USER_NOT_REGISTERED);
    }

    #[tokio::test]
    async fn test_update_user_removed_concurrently_is_bad_request() {
        let mut user_repo = MockUserRepository::new();
        let mut dog_repo = MockDogRepository::new();

        let user = create_test_user(5, "Ana");
        user_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        user_repo.expect_update().times(1).returning(|_, _| Ok(None));
        dog_repo.expect_find_by_owners().never();

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let err = service
            .update_user(
                5,
                UserUpdate {
                    name: "Ana".to_string(),
                    last_name: "Ruiz".to_string(),
                    email: "ana@example.com".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.to_string(), USER_NOT_REGISTERED);
    }

    #[tokio::test]
    async fn test_delete_user_queries_users() {
        let mut user_repo = MockUserRepository::new();
        let dog_repo = MockDogRepository::new();

        let user = create_test_user(4, "Leo");
        user_repo
            .expect_find_by_id()
            .withf(|id| *id == 4)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        user_repo
            .expect_delete()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(true));

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        assert!(service.delete_user(4).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_bad_request() {
        let mut user_repo = MockUserRepository::new();
        let dog_repo = MockDogRepository::new();

        user_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        user_repo.expect_delete().never();

        let service = UserService::new(Arc::new(user_repo), Arc::new(dog_repo));

        let err = service.delete_user(5).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }
}
