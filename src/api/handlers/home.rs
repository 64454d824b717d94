//! Handler for the root greeting.

use axum::Json;
use serde_json::{Value, json};

/// Returns a static greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
