//! Data Transfer Objects - request/response types for the API.
//!
//! User-facing types never carry the password hash.

use serde::{Deserialize, Serialize};

/// Request to sign up a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Response to a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user_id: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing the bearer token and its subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
}

/// A user's status line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Request to replace the caller's status line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub status: String,
    pub posts: Vec<String>,
    pub created_at: String,
}

/// Post fields supplied by the caller, shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

/// A post as returned across the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One page of the feed plus the full collection count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<PostResponse>,
    pub total_items: u64,
}

/// Payload published to the posts channel on feed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEvent {
    pub action: String,
    pub post: PostResponse,
}
