//! # Feed Shared
//!
//! Wire types shared by the server and any client: request/response DTOs and
//! RFC 7807 error bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
