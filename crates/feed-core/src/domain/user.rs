use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status a user starts out with before setting their own.
pub const DEFAULT_STATUS: &str = "I am new!";

/// User entity - an account that owns posts.
///
/// `posts` is the backlink: the ordered ids of every post whose `creator`
/// is this user. Repositories keep it consistent with the posts themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub status: String,
    pub posts: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated id, default status, and no posts yet.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            status: DEFAULT_STATUS.to_string(),
            posts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the status line. Callers must have checked ownership first.
    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
