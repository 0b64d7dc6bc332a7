use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use feed_core::domain::{Post, User};
use feed_core::error::RepoError;
use feed_core::ports::{PostRepository, UserRepository};

#[derive(Default)]
struct StoreInner {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
    /// Post ids in insertion order, the pagination tie-break.
    post_order: Vec<Uuid>,
}

/// Shared in-memory store backing both repositories.
///
/// A single lock over users and posts makes a post mutation and the matching
/// backlink update one atomic operation.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repository(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    pub fn post_repository(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            store: self.clone(),
        }
    }
}

/// In-memory user repository.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: MemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut inner = self.store.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("email already registered".into()));
        }

        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let inner = self.store.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let inner = self.store.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut inner = self.store.inner.write().await;

        if !inner.users.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }

        inner.users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory post repository.
#[derive(Clone)]
pub struct InMemoryPostRepository {
    store: MemoryStore,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut inner = self.store.inner.write().await;

        let Some(creator) = inner.users.get_mut(&post.creator) else {
            return Err(RepoError::Constraint("creator does not exist".into()));
        };
        creator.posts.push(post.id);

        inner.post_order.push(post.id);
        inner.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let inner = self.store.inner.read().await;
        Ok(inner.posts.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut inner = self.store.inner.write().await;

        if !inner.posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }

        inner.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut inner = self.store.inner.write().await;

        let Some(post) = inner.posts.remove(&id) else {
            return Err(RepoError::NotFound);
        };
        inner.post_order.retain(|p| *p != id);

        if let Some(creator) = inner.users.get_mut(&post.creator) {
            creator.posts.retain(|p| *p != id);
        }

        Ok(())
    }

    async fn count_all(&self) -> Result<u64, RepoError> {
        let inner = self.store.inner.read().await;
        Ok(inner.posts.len() as u64)
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let inner = self.store.inner.read().await;

        // Insertion order in, stable sort by created_at descending: ties keep
        // insertion order.
        let mut page: Vec<Post> = inner
            .post_order
            .iter()
            .filter_map(|id| inner.posts.get(id).cloned())
            .collect();
        page.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(page
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    async fn seeded_user(store: &MemoryStore, email: &str) -> User {
        store
            .user_repository()
            .create(User::new(email.into(), "Ann".into(), "hash".into()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_and_first_user_unchanged() {
        let store = MemoryStore::new();
        let users = store.user_repository();

        let first = seeded_user(&store, "a@x.com").await;
        let second = users
            .create(User::new("a@x.com".into(), "Bob".into(), "other".into()))
            .await;

        assert!(matches!(second, Err(RepoError::Constraint(_))));
        let kept = users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(kept.id, first.id);
        assert_eq!(kept.name, "Ann");
    }

    #[tokio::test]
    async fn backlink_tracks_post_create_and_delete() {
        let store = MemoryStore::new();
        let posts = store.post_repository();
        let users = store.user_repository();

        let user = seeded_user(&store, "a@x.com").await;
        let post = posts
            .create(Post::new(
                user.id,
                "Hi There".into(),
                "Hello world!".into(),
                "i".into(),
            ))
            .await
            .unwrap();

        let reloaded = users.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(reloaded.posts, vec![post.id]);

        posts.delete(post.id).await.unwrap();
        let reloaded = users.find_by_id(user.id).await.unwrap().unwrap();
        assert!(reloaded.posts.is_empty());
    }

    #[tokio::test]
    async fn creating_a_post_for_a_missing_user_fails() {
        let store = MemoryStore::new();
        let posts = store.post_repository();

        let result = posts
            .create(Post::new(
                Uuid::new_v4(),
                "Hi There".into(),
                "Hello world!".into(),
                "i".into(),
            ))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(posts.count_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleting_twice_reports_not_found() {
        let store = MemoryStore::new();
        let posts = store.post_repository();
        let user = seeded_user(&store, "a@x.com").await;

        let post = posts
            .create(Post::new(user.id, "Hi There".into(), "Hello!".into(), "i".into()))
            .await
            .unwrap();

        posts.delete(post.id).await.unwrap();
        assert!(matches!(posts.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn pages_are_newest_first_with_stable_ties() {
        let store = MemoryStore::new();
        let posts = store.post_repository();
        let user = seeded_user(&store, "a@x.com").await;

        let base = Utc::now();
        let mut ids = Vec::new();
        for i in 0..5 {
            let mut post = Post::new(user.id, "Hi There".into(), "Hello!".into(), "i".into());
            // Two oldest share a timestamp to exercise the tie-break.
            post.created_at = base + TimeDelta::seconds(i64::max(i - 1, 0));
            post.updated_at = post.created_at;
            ids.push(post.id);
            posts.create(post).await.unwrap();
        }

        assert_eq!(posts.count_all().await.unwrap(), 5);

        let first = posts.find_page(0, 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, ids[4]);
        assert_eq!(first[1].id, ids[3]);

        let last = posts.find_page(4, 2).await.unwrap();
        assert_eq!(last.len(), 1);
        // ids[0] and ids[1] tie on created_at; insertion order kept.
        let middle = posts.find_page(2, 2).await.unwrap();
        assert_eq!(middle[1].id, ids[0]);
        assert_eq!(last[0].id, ids[1]);
    }

    #[tokio::test]
    async fn saving_a_missing_post_reports_not_found() {
        let store = MemoryStore::new();
        let posts = store.post_repository();

        let phantom = Post::new(Uuid::new_v4(), "Hi There".into(), "Hello!".into(), "i".into());
        assert!(matches!(posts.save(phantom).await, Err(RepoError::NotFound)));
    }
}
