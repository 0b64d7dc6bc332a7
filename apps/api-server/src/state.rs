//! Application state - shared across all handlers.

use std::sync::Arc;

use feed_core::ports::{EventPublisher, PostRepository, UserRepository};
use feed_infra::{InMemoryEventBus, MemoryStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub events: Arc<dyn EventPublisher>,
    pub page_size: u64,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let events: Arc<dyn EventPublisher> = Arc::new(InMemoryEventBus::default());

        #[cfg(feature = "postgres")]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            if let Some(db_config) = &config.database {
                match feed_infra::connect(db_config).await {
                    Ok(conn) => (
                        Arc::new(feed_infra::PostgresUserRepository::new(conn.clone())),
                        Arc::new(feed_infra::PostgresPostRepository::new(conn)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::memory_repos()
        };

        tracing::info!(page_size = config.page_size, "Application state initialized");

        Self {
            users,
            posts,
            events,
            page_size: config.page_size,
        }
    }

    fn memory_repos() -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        let store = MemoryStore::new();
        (
            Arc::new(store.user_repository()),
            Arc::new(store.post_repository()),
        )
    }
}
