//! Confirmation message DTO.

use serde::{Deserialize, Serialize};

/// Body returned by delete endpoints, e.g. `{"mensaje": "Eliminación exitosa"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

impl MessageResponse {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}
