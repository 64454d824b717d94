//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::dog_service::DogService`] - Dog registry rules (name uniqueness, lookups)
//! - [`services::user_service::UserService`] - Users and their owned dogs

pub mod services;
