use async_trait::async_trait;
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse};
use std::sync::Arc;

/// Namespace of named cache stores.
///
/// The storage backend is the only shared mutable resource in the agent; it
/// must be safe under concurrent access on its own, the use cases add no
/// locking on top.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Opens the store with the given name, creating it if absent.
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheStore>, AgentError>;

    /// Names of every store currently present in the namespace.
    async fn store_names(&self) -> Result<Vec<String>, AgentError>;

    /// Deletes a store and all its entries. Returns `true` if it existed.
    async fn delete(&self, name: &str) -> Result<bool, AgentError>;
}

/// One named key-value store mapping request descriptors to stored responses.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Looks up a stored response by the request's descriptor.
    async fn lookup(&self, request: &FetchRequest) -> Result<Option<FetchResponse>, AgentError>;

    /// Stores a response keyed by the request's descriptor, replacing any
    /// previous entry.
    async fn put(&self, request: &FetchRequest, response: &FetchResponse)
        -> Result<(), AgentError>;
}
