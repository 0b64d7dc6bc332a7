//! Event publishing port - publish-only fan-out of feed activity.

use async_trait::async_trait;

/// Channel new-post events are published to.
pub const POSTS_CHANNEL: &str = "posts";

/// Publish-only side of a pub/sub channel.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, channel: &str, payload: &str) -> Result<(), PublishError>;
}

/// Publishing failures.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Failed to publish: {0}")]
    Publish(String),
}
