//! PostgreSQL implementation of dog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Dog, DogUpdate, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;

const DOG_COLUMNS: &str = "id, name, picture, is_adopted, create_date, id_user";

#[derive(sqlx::FromRow)]
struct DogRow {
    id: i64,
    name: String,
    picture: String,
    is_adopted: bool,
    create_date: DateTime<Utc>,
    id_user: Option<i64>,
}

impl From<DogRow> for Dog {
    fn from(r: DogRow) -> Self {
        Dog {
            id: r.id,
            name: r.name,
            picture: r.picture,
            is_adopted: r.is_adopted,
            create_date: r.create_date,
            id_user: r.id_user,
        }
    }
}

/// PostgreSQL repository for dogs.
///
/// Each call checks a connection out of the pool for the duration of one
/// statement; the connection returns to the pool when the future completes.
pub struct PgDogRepository {
    pool: Arc<PgPool>,
}

impl PgDogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for PgDogRepository {
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            INSERT INTO dogs (name, picture, is_adopted, create_date, id_user)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {DOG_COLUMNS}
            "#
        ))
        .bind(new_dog.name)
        .bind(new_dog.picture)
        .bind(new_dog.is_adopted)
        .bind(new_dog.create_date)
        .bind(new_dog.id_user)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Dog>, AppError> {
        let rows = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn list_adopted(&self) -> Result<Vec<Dog>, AppError> {
        let rows = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs WHERE is_adopted = TRUE ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            SELECT {DOG_COLUMNS}
            FROM dogs
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Dog::from))
    }

    async fn find_by_owners(&self, user_ids: &[i64]) -> Result<Vec<Dog>, AppError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs WHERE id_user = ANY($1) ORDER BY id"
        ))
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn update(&self, id: i64, update: DogUpdate) -> Result<Option<Dog>, AppError> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            UPDATE dogs SET
                picture     = $2,
                is_adopted  = $3,
                create_date = $4,
                id_user     = $5
            WHERE id = $1
            RETURNING {DOG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.picture)
        .bind(update.is_adopted)
        .bind(update.create_date)
        .bind(update.id_user)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Dog::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, only_adopted: bool) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM dogs WHERE ($1 = FALSE OR is_adopted)")
                .bind(only_adopted)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
