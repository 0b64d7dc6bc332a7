//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain user, attaching the backlink read from the posts
    /// table by the repository.
    pub fn into_domain(self, posts: Vec<Uuid>) -> feed_core::domain::User {
        feed_core::domain::User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            status: self.status,
            posts,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

/// Conversion from domain User to SeaORM ActiveModel. The backlink is not a
/// column; it lives in the posts table's creator reference.
impl From<feed_core::domain::User> for ActiveModel {
    fn from(user: feed_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            status: Set(user.status),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
