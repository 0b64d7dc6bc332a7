//! Domain entities.

mod post;
mod user;

pub use post::Post;
pub use user::{DEFAULT_STATUS, User};
