//! PostgreSQL persistence via SeaORM (behind the `postgres` feature).

mod connections;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::connect;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
mod postgres_repo;

#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresPostRepository, PostgresUserRepository};

#[cfg(all(test, feature = "postgres"))]
mod tests;
