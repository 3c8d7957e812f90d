use async_trait::async_trait;
use dashmap::DashMap;
use offline_agent_application::ports::{CacheStorage, CacheStore};
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse};
use std::sync::Arc;
use tracing::debug;

/// In-memory cache storage.
///
/// Backs tests and ephemeral deployments; nothing survives a restart. The
/// DashMap gives the atomic get/put-by-key semantics the use cases rely on.
pub struct MemoryCacheStorage {
    stores: DashMap<String, Arc<MemoryCacheStore>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }
}

impl Default for MemoryCacheStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheStore>, AgentError> {
        let store = self
            .stores
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(cache = %name, "Created in-memory cache store");
                Arc::new(MemoryCacheStore::new())
            })
            .clone();
        Ok(store)
    }

    async fn store_names(&self) -> Result<Vec<String>, AgentError> {
        let mut names: Vec<String> = self.stores.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<bool, AgentError> {
        Ok(self.stores.remove(name).is_some())
    }
}

pub struct MemoryCacheStore {
    entries: DashMap<String, FetchResponse>,
}

impl MemoryCacheStore {
    fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn lookup(&self, request: &FetchRequest) -> Result<Option<FetchResponse>, AgentError> {
        Ok(self
            .entries
            .get(&request.cache_key())
            .map(|entry| entry.value().clone()))
    }

    async fn put(
        &self,
        request: &FetchRequest,
        response: &FetchResponse,
    ) -> Result<(), AgentError> {
        self.entries.insert(request.cache_key(), response.clone());
        Ok(())
    }
}
