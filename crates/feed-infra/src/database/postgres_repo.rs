//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use feed_core::domain::{Post, User};
use feed_core::error::RepoError;
use feed_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// Classify a write failure: constraint violations are the caller's problem,
/// everything else is a query error.
fn map_write_err(e: DbErr) -> RepoError {
    let msg = e.to_string();
    let lower = msg.to_lowercase();
    if lower.contains("duplicate") || lower.contains("unique") {
        RepoError::Constraint("entity already exists".to_string())
    } else if lower.contains("foreign key") {
        RepoError::Constraint("referenced entity does not exist".to_string())
    } else {
        RepoError::Query(msg)
    }
}

fn map_update_err(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(c) => format!("{c}***@{domain}"),
            None => "***".to_string(),
        },
        None => "***".to_string(),
    }
}

/// PostgreSQL user repository.
///
/// The backlink is not stored on the user row; it is read from the posts
/// table's creator reference, so it is consistent by construction.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn backlink(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        let posts = PostEntity::find()
            .filter(post::Column::CreatorId.eq(user_id))
            .order_by_asc(post::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(posts.into_iter().map(|m| m.id).collect())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, u: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(u)
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(model.into_domain(Vec::new()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let Some(model) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let posts = self.backlink(model.id).await?;
        Ok(Some(model.into_domain(posts)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let Some(model) = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let posts = self.backlink(model.id).await?;
        Ok(Some(model.into_domain(posts)))
    }

    async fn save(&self, u: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(u)
            .update(&self.db)
            .await
            .map_err(map_update_err)?;

        let posts = self.backlink(model.id).await?;
        Ok(model.into_domain(posts))
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, p: Post) -> Result<Post, RepoError> {
        // The creator foreign key enforces the referential invariant; the
        // backlink is the same edge read from the other side.
        let model = post::ActiveModel::from(p)
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, p: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(p)
            .update(&self.db)
            .await
            .map_err(map_update_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count_all(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Seq)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
