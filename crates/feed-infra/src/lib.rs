//! # Feed Infrastructure
//!
//! Concrete implementations of the ports defined in `feed-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory persistence only
//! - `postgres` - PostgreSQL repositories via SeaORM

pub mod auth;
pub mod database;
pub mod events;
pub mod memory;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::DatabaseConfig;
pub use events::InMemoryEventBus;
pub use memory::{InMemoryPostRepository, InMemoryUserRepository, MemoryStore};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository, connect};
