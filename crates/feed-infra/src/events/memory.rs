//! In-process event bus on tokio broadcast channels.
//!
//! Works within a single process only; publishing to a channel nobody
//! subscribed to is a no-op.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};

use feed_core::ports::{EventPublisher, PublishError};

/// In-memory publish/subscribe bus keyed by channel name.
pub struct InMemoryEventBus {
    channels: RwLock<HashMap<String, broadcast::Sender<String>>>,
    buffer_size: usize,
}

impl InMemoryEventBus {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer_size,
        }
    }

    /// Open a receiver on a channel, creating the channel if needed.
    pub async fn subscribe(&self, channel: &str) -> broadcast::Receiver<String> {
        let mut channels = self.channels.write().await;
        channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(self.buffer_size).0)
            .subscribe()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, channel: &str, payload: &str) -> Result<(), PublishError> {
        let channels = self.channels.read().await;

        if let Some(sender) = channels.get(channel) {
            // Ignore send errors (all receivers dropped).
            let _ = sender.send(payload.to_string());
            tracing::debug!(channel = %channel, "Event published");
        } else {
            tracing::debug!(channel = %channel, "No subscribers for channel");
        }

        Ok(())
    }
}
