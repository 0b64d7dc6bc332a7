//! In-memory persistence - used in tests and as the fallback when no
//! database is configured. Data is lost on process restart.

mod store;

pub use store::{InMemoryPostRepository, InMemoryUserRepository, MemoryStore};
