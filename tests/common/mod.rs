#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use dog_adoption::domain::entities::{Dog, DogUpdate, NewDog, NewUser, User, UserUpdate};
use dog_adoption::domain::repositories::{DogRepository, UserRepository};
use dog_adoption::error::AppError;
use dog_adoption::routes::app_router;
use dog_adoption::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

/// In-memory store backing both repositories, mirroring the PostgreSQL
/// schema: ids are sequential, `dogs.id_user` must reference a user and is
/// cleared when that user is deleted.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: bool,
}

#[derive(Default)]
struct Tables {
    dogs: Vec<Dog>,
    users: Vec<User>,
    next_dog_id: i64,
    next_user_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store whose every call fails like an unreachable database.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            failing: true,
            ..Self::default()
        })
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }

    fn check_owner(tables: &Tables, id_user: Option<i64>) -> Result<(), AppError> {
        match id_user {
            Some(id) if !tables.users.iter().any(|u| u.id == id) => Err(AppError::bad_request(
                "Referenced user does not exist",
                json!({ "constraint": "dogs_id_user_fkey" }),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DogRepository for InMemoryStore {
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        Self::check_owner(&t, new_dog.id_user)?;

        t.next_dog_id += 1;
        let dog = Dog {
            id: t.next_dog_id,
            name: new_dog.name,
            picture: new_dog.picture,
            is_adopted: new_dog.is_adopted,
            create_date: new_dog.create_date,
            id_user: new_dog.id_user,
        };
        t.dogs.push(dog.clone());
        Ok(dog)
    }

    async fn list(&self) -> Result<Vec<Dog>, AppError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().dogs.clone())
    }

    async fn list_adopted(&self) -> Result<Vec<Dog>, AppError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.dogs.iter().filter(|d| d.is_adopted).cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.dogs.iter().find(|d| d.name == name).cloned())
    }

    async fn find_by_owners(&self, user_ids: &[i64]) -> Result<Vec<Dog>, AppError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.dogs
            .iter()
            .filter(|d| d.id_user.is_some_and(|id| user_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, update: DogUpdate) -> Result<Option<Dog>, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        Self::check_owner(&t, update.id_user)?;

        let Some(dog) = t.dogs.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        dog.picture = update.picture;
        dog.is_adopted = update.is_adopted;
        dog.create_date = update.create_date;
        dog.id_user = update.id_user;
        Ok(Some(dog.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let before = t.dogs.len();
        t.dogs.retain(|d| d.id != id);
        Ok(t.dogs.len() < before)
    }

    async fn count(&self, only_adopted: bool) -> Result<i64, AppError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.dogs.iter().filter(|d| !only_adopted || d.is_adopted).count() as i64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        t.next_user_id += 1;
        let user = User {
            id: t.next_user_id,
            name: new_user.name,
            last_name: new_user.last_name,
            email: new_user.email,
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let Some(user) = t.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.name = update.name;
        user.last_name = update.last_name;
        user.email = update.email;
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let before = t.users.len();
        t.users.retain(|u| u.id != id);
        if t.users.len() == before {
            return Ok(false);
        }
        for dog in t.dogs.iter_mut().filter(|d| d.id_user == Some(id)) {
            dog.id_user = None;
        }
        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().users.len() as i64)
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store.clone(), store)
}

/// The production router without the rate limiter, which needs a peer address.
pub fn make_server(store: Arc<InMemoryStore>) -> TestServer {
    let app = app_router(create_test_state(store), None);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_user(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (name, last_name, email) VALUES ($1, 'Test', 'test@example.com') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_dog(pool: &PgPool, name: &str, is_adopted: bool, id_user: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO dogs (name, picture, is_adopted, id_user) VALUES ($1, 'http://x/dog.png', $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(is_adopted)
    .bind(id_user)
    .fetch_one(pool)
    .await
    .unwrap()
}
