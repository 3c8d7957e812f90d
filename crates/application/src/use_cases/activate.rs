use crate::ports::{CacheStorage, ClientRegistry};
use offline_agent_domain::AgentError;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case: evict stale cache store versions and claim open pages.
///
/// Every store whose name differs from the current version is deleted; a
/// failed delete is logged and activation moves on to the next name.
/// Idempotent: a second run with the same version deletes nothing.
pub struct ActivateUseCase {
    storage: Arc<dyn CacheStorage>,
    clients: Arc<dyn ClientRegistry>,
    cache_name: String,
}

impl ActivateUseCase {
    pub fn new(
        storage: Arc<dyn CacheStorage>,
        clients: Arc<dyn ClientRegistry>,
        cache_name: String,
    ) -> Self {
        Self {
            storage,
            clients,
            cache_name,
        }
    }

    /// Returns the number of stale stores deleted.
    pub async fn execute(&self) -> Result<u64, AgentError> {
        info!(cache = %self.cache_name, "Activating");

        let mut deleted = 0u64;
        for name in self.storage.store_names().await? {
            if name == self.cache_name {
                continue;
            }
            match self.storage.delete(&name).await {
                Ok(true) => {
                    info!(cache = %name, "Deleted stale cache");
                    deleted += 1;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(cache = %name, error = %e, "Failed to delete stale cache");
                }
            }
        }

        // Control all open pages immediately, no reload needed.
        self.clients.claim().await?;

        info!(deleted, "Activation complete");
        Ok(deleted)
    }
}
