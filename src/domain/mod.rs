//! Domain layer containing business entities and repository contracts.
//!
//! This module defines the records the service manages and the data-access
//! traits the application layer depends on, independent of the database.
//!
//! # Architecture
//!
//! - [`entities`] - Dog and User records plus their create/update inputs
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
