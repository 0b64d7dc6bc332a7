use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// User persistence.
///
/// The repository is the source of truth for email uniqueness; callers must
/// not rely on a separate existence check being race-free.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Constraint` if the email is taken.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Lookup by (already normalized) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Idempotent full update of an existing user.
    async fn save(&self, user: User) -> Result<User, RepoError>;
}

/// Post persistence.
///
/// Creating or deleting a post maintains the creator's backlink in the same
/// logical operation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and append its id to the creator's `posts` set.
    /// Fails with `Constraint` if the creator does not exist.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Idempotent full update of an existing post.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post and remove its id from the creator's `posts` set.
    /// Fails with `NotFound` when the id is absent, never silently ignores.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Full collection count, independent of any page window.
    async fn count_all(&self) -> Result<u64, RepoError>;

    /// One page of posts ordered by `created_at` descending, ties broken by
    /// insertion order.
    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError>;
}
