use crate::ports::{CacheStorage, NetworkGateway};
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where the response handed back to the page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServedFrom {
    Cache,
    Network,
    OfflineFallback,
}

/// Decision for one intercepted request.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Not a retrieval request; the host forwards it untouched and the cache
    /// store is never consulted.
    PassThrough,
    Response {
        response: FetchResponse,
        served: ServedFrom,
    },
}

impl FetchOutcome {
    fn from_cache(response: FetchResponse) -> Self {
        Self::Response {
            response,
            served: ServedFrom::Cache,
        }
    }

    fn from_network(response: FetchResponse) -> Self {
        Self::Response {
            response,
            served: ServedFrom::Network,
        }
    }

    fn offline_fallback(response: FetchResponse) -> Self {
        Self::Response {
            response,
            served: ServedFrom::OfflineFallback,
        }
    }
}

/// Use case: cache-first fetch interception with network fallback.
///
/// Cache hits are replayed as-is, with no freshness check or revalidation.
/// Misses go to the network; a plain same-origin 200 is stored on the way
/// back. When the network fails entirely the configured offline page is
/// served from the current store, if it was ever cached.
pub struct HandleFetchUseCase {
    storage: Arc<dyn CacheStorage>,
    network: Arc<dyn NetworkGateway>,
    cache_name: String,
    offline_fallback: String,
}

impl HandleFetchUseCase {
    pub fn new(
        storage: Arc<dyn CacheStorage>,
        network: Arc<dyn NetworkGateway>,
        cache_name: String,
        offline_fallback: String,
    ) -> Self {
        Self {
            storage,
            network,
            cache_name,
            offline_fallback,
        }
    }

    pub async fn execute(&self, request: &FetchRequest) -> Result<FetchOutcome, AgentError> {
        if !request.method.is_retrieval() {
            return Ok(FetchOutcome::PassThrough);
        }

        let store = self.storage.open(&self.cache_name).await?;

        if let Some(cached) = store.lookup(request).await? {
            debug!(url = %request.url, "Cache HIT");
            return Ok(FetchOutcome::from_cache(cached));
        }

        debug!(url = %request.url, "Cache MISS");

        // The network leg consumes its own copy so the original request
        // descriptor stays available as the cache key.
        let network_request = request.clone();
        match self.network.fetch(&network_request).await {
            Ok(response) => {
                if response.is_cacheable() {
                    store.put(request, &response).await?;
                    debug!(url = %request.url, "Response cached");
                }
                Ok(FetchOutcome::from_network(response))
            }
            Err(e) => {
                warn!(url = %request.url, error = %e, "Network fetch failed");
                self.serve_offline_fallback(&store, request, e).await
            }
        }
    }

    async fn serve_offline_fallback(
        &self,
        store: &Arc<dyn crate::ports::CacheStore>,
        request: &FetchRequest,
        cause: AgentError,
    ) -> Result<FetchOutcome, AgentError> {
        let fallback = FetchRequest::get(self.offline_fallback.as_str());
        match store.lookup(&fallback).await? {
            Some(page) => {
                debug!(url = %request.url, fallback = %self.offline_fallback, "Serving offline page");
                Ok(FetchOutcome::offline_fallback(page))
            }
            None => Err(cause),
        }
    }
}
