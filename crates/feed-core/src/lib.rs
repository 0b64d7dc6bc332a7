//! # Feed Core
//!
//! The domain layer of the feed backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod auth;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validate;

pub use auth::AuthContext;
pub use error::DomainError;
