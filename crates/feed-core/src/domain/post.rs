use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a feed entry owned by exactly one user.
///
/// `creator` is set once at creation and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. Both timestamps start out equal.
    pub fn new(creator: Uuid, title: String, content: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit to the mutable fields and bump `updated_at`.
    pub fn edit(&mut self, title: String, content: String, image_url: String) {
        self.title = title;
        self.content = content;
        self.image_url = image_url;
        self.updated_at = Utc::now();
    }
}
