use crate::ports::{CacheStorage, ClientRegistry, NetworkGateway};
use offline_agent_domain::{AgentError, FetchRequest};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case: populate the current cache store with the app shell.
///
/// Runs once per agent version, when the host raises the install event.
/// All-or-nothing: the first manifest URL that cannot be fetched aborts the
/// population with an error. Entries stored before the failure are left in
/// place; there is no rollback.
pub struct InstallShellUseCase {
    storage: Arc<dyn CacheStorage>,
    network: Arc<dyn NetworkGateway>,
    clients: Arc<dyn ClientRegistry>,
    cache_name: String,
    manifest: Vec<String>,
}

impl InstallShellUseCase {
    pub fn new(
        storage: Arc<dyn CacheStorage>,
        network: Arc<dyn NetworkGateway>,
        clients: Arc<dyn ClientRegistry>,
        cache_name: String,
        manifest: Vec<String>,
    ) -> Self {
        Self {
            storage,
            network,
            clients,
            cache_name,
            manifest,
        }
    }

    /// Returns the number of shell resources cached.
    pub async fn execute(&self) -> Result<u64, AgentError> {
        info!(cache = %self.cache_name, "Installing");

        // Supersede any waiting predecessor regardless of how the population
        // turns out; the host may still retry a failed install.
        self.clients.skip_waiting().await?;

        let store = self.storage.open(&self.cache_name).await?;

        let mut cached = 0u64;
        for url in &self.manifest {
            let request = FetchRequest::get(url.as_str());
            let response = self.network.fetch(&request).await.map_err(|e| {
                error!(url = %url, error = %e, "Shell population failed");
                AgentError::ShellPopulation {
                    url: url.clone(),
                    message: e.to_string(),
                }
            })?;

            store.put(&request, &response).await?;
            cached += 1;
            debug!(url = %url, "Shell resource cached");
        }

        info!(cache = %self.cache_name, cached, "App shell cached");
        Ok(cached)
    }
}
