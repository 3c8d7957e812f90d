#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use offline_agent_application::ports::{
    CacheStorage, CacheStore, ClientRegistry, NetworkGateway, NotificationPresenter,
};
use offline_agent_domain::{
    AgentError, FetchRequest, FetchResponse, NotificationPayload, ResponseKind,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock CacheStorage / CacheStore
// ============================================================================

pub struct MockCacheStore {
    entries: RwLock<HashMap<String, FetchResponse>>,
    lookups: AtomicUsize,
    puts: AtomicUsize,
}

impl MockCacheStore {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains(&self, request: &FetchRequest) -> bool {
        self.entries.read().await.contains_key(&request.cache_key())
    }

    pub async fn seed(&self, request: &FetchRequest, response: FetchResponse) {
        self.entries
            .write()
            .await
            .insert(request.cache_key(), response);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn lookup(&self, request: &FetchRequest) -> Result<Option<FetchResponse>, AgentError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.read().await.get(&request.cache_key()).cloned())
    }

    async fn put(
        &self,
        request: &FetchRequest,
        response: &FetchResponse,
    ) -> Result<(), AgentError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .write()
            .await
            .insert(request.cache_key(), response.clone());
        Ok(())
    }
}

pub struct MockCacheStorage {
    stores: RwLock<HashMap<String, Arc<MockCacheStore>>>,
    delete_should_fail: RwLock<Vec<String>>,
    opens: AtomicUsize,
}

impl MockCacheStorage {
    pub fn new() -> Self {
        Self {
            stores: RwLock::new(HashMap::new()),
            delete_should_fail: RwLock::new(Vec::new()),
            opens: AtomicUsize::new(0),
        }
    }

    /// Creates the mock with the given store names already present.
    pub async fn with_stores(names: Vec<&str>) -> Self {
        let storage = Self::new();
        {
            let mut stores = storage.stores.write().await;
            for name in names {
                stores.insert(name.to_string(), Arc::new(MockCacheStore::new()));
            }
        }
        storage
    }

    /// Direct handle to a store, bypassing the open counter.
    pub async fn store(&self, name: &str) -> Arc<MockCacheStore> {
        let mut stores = self.stores.write().await;
        stores
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MockCacheStore::new()))
            .clone()
    }

    pub async fn fail_delete_of(&self, name: &str) {
        self.delete_should_fail.write().await.push(name.to_string());
    }

    pub async fn names(&self) -> Vec<String> {
        self.stores.read().await.keys().cloned().collect()
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl Default for MockCacheStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStorage for MockCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheStore>, AgentError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let mut stores = self.stores.write().await;
        let store = stores
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MockCacheStore::new()))
            .clone();
        Ok(store)
    }

    async fn store_names(&self) -> Result<Vec<String>, AgentError> {
        let mut names: Vec<String> = self.stores.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<bool, AgentError> {
        if self.delete_should_fail.read().await.iter().any(|n| n == name) {
            return Err(AgentError::cache_store(name, "mock delete failure"));
        }
        Ok(self.stores.write().await.remove(name).is_some())
    }
}

// ============================================================================
// Mock NetworkGateway
// ============================================================================

pub struct MockNetworkGateway {
    responses: RwLock<HashMap<String, FetchResponse>>,
    should_fail: AtomicBool,
    requests: RwLock<Vec<String>>,
}

impl MockNetworkGateway {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            should_fail: AtomicBool::new(false),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_response(&self, url: &str, response: FetchResponse) {
        self.responses.write().await.insert(url.to_string(), response);
    }

    pub async fn set_responses(&self, responses: Vec<(&str, FetchResponse)>) {
        let mut map = self.responses.write().await;
        for (url, response) in responses {
            map.insert(url.to_string(), response);
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

impl Default for MockNetworkGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkGateway for MockNetworkGateway {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, AgentError> {
        self.requests.write().await.push(request.url.to_string());

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(AgentError::network_fetch(
                request.url.to_string(),
                "mock network failure",
            ));
        }

        self.responses
            .read()
            .await
            .get(request.url.as_ref())
            .cloned()
            .ok_or_else(|| {
                AgentError::network_fetch(request.url.to_string(), "no mock response")
            })
    }
}

// ============================================================================
// Mock ClientRegistry
// ============================================================================

#[derive(Default)]
pub struct MockClientRegistry {
    skip_waiting_calls: AtomicUsize,
    claim_calls: AtomicUsize,
    focused: RwLock<Vec<String>>,
}

impl MockClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_waiting_count(&self) -> usize {
        self.skip_waiting_calls.load(Ordering::SeqCst)
    }

    pub fn claim_count(&self) -> usize {
        self.claim_calls.load(Ordering::SeqCst)
    }

    pub async fn focused_urls(&self) -> Vec<String> {
        self.focused.read().await.clone()
    }
}

#[async_trait]
impl ClientRegistry for MockClientRegistry {
    async fn skip_waiting(&self) -> Result<(), AgentError> {
        self.skip_waiting_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgentError> {
        self.claim_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn focus_or_open(&self, url: &str) -> Result<(), AgentError> {
        self.focused.write().await.push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// Mock NotificationPresenter
// ============================================================================

#[derive(Default)]
pub struct MockNotificationPresenter {
    shown: RwLock<Vec<(String, NotificationPayload)>>,
    dismissed: RwLock<Vec<String>>,
}

impl MockNotificationPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn shown(&self) -> Vec<(String, NotificationPayload)> {
        self.shown.read().await.clone()
    }

    pub async fn dismissed_tags(&self) -> Vec<String> {
        self.dismissed.read().await.clone()
    }
}

#[async_trait]
impl NotificationPresenter for MockNotificationPresenter {
    async fn show(&self, title: &str, payload: &NotificationPayload) -> Result<(), AgentError> {
        self.shown
            .write()
            .await
            .push((title.to_string(), payload.clone()));
        Ok(())
    }

    async fn dismiss(&self, tag: &str) -> Result<(), AgentError> {
        self.dismissed.write().await.push(tag.to_string());
        Ok(())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn ok_response(body: &str) -> FetchResponse {
    FetchResponse::new(200, body.as_bytes().to_vec())
}

pub fn cors_response(body: &str) -> FetchResponse {
    FetchResponse::new(200, body.as_bytes().to_vec()).with_kind(ResponseKind::Cors)
}

pub fn push_data(text: &str) -> Option<Bytes> {
    Some(Bytes::copy_from_slice(text.as_bytes()))
}
