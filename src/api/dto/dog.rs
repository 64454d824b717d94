//! DTOs for dog endpoints.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::{Dog, DogUpdate, NewDog};

/// Request body for `POST /api/dogs/created`.
///
/// `create_date` defaults to the time the request is decoded.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDogRequest {
    #[validate(length(min = 1, max = 20))]
    pub name: String,

    pub picture: String,

    pub is_adopted: bool,

    #[serde(default = "Utc::now", deserialize_with = "deserialize_create_date")]
    pub create_date: DateTime<Utc>,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub id_user: Option<i64>,
}

impl From<CreateDogRequest> for NewDog {
    fn from(r: CreateDogRequest) -> Self {
        NewDog {
            name: r.name,
            picture: r.picture,
            is_adopted: r.is_adopted,
            create_date: r.create_date,
            id_user: r.id_user,
        }
    }
}

/// Request body for `PUT /api/dogs/{name}`.
///
/// Every field replaces the stored value. Omitting `id_user` clears the owner.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDogRequest {
    pub picture: String,

    pub is_adopted: bool,

    #[serde(default = "Utc::now", deserialize_with = "deserialize_create_date")]
    pub create_date: DateTime<Utc>,

    #[validate(range(min = 1))]
    #[serde(default)]
    pub id_user: Option<i64>,
}

impl From<UpdateDogRequest> for DogUpdate {
    fn from(r: UpdateDogRequest) -> Self {
        DogUpdate {
            picture: r.picture,
            is_adopted: r.is_adopted,
            create_date: r.create_date,
            id_user: r.id_user,
        }
    }
}

/// Parses a creation date. Timestamps without an offset are taken as UTC,
/// with either `T` or a space between date and time.
fn parse_create_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid datetime '{raw}': {e}"))
}

fn deserialize_create_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_create_date(&raw).map_err(serde::de::Error::custom)
}

/// JSON representation of a dog.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DogResponse {
    pub id: i64,
    pub name: String,
    pub picture: String,
    pub is_adopted: bool,
    pub create_date: DateTime<Utc>,
    pub id_user: Option<i64>,
}

impl From<Dog> for DogResponse {
    fn from(d: Dog) -> Self {
        DogResponse {
            id: d.id,
            name: d.name,
            picture: d.picture,
            is_adopted: d.is_adopted,
            create_date: d.create_date,
            id_user: d.id_user,
        }
    }
}
