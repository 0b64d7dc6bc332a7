//! Ports - trait seams implemented by the infrastructure crate.

mod auth;
mod events;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use events::{EventPublisher, POSTS_CHANNEL, PublishError};
pub use repository::{PostRepository, UserRepository};
