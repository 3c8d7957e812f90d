#![allow(dead_code)]


pub use fixtures::*;

use async_trait::async_trait;
use offline_agent_application::ports::{
    ClientRegistry, NetworkGateway, NotificationPresenter,
};
use offline_agent_application::use_cases::{
    ActivateUseCase, HandleFetchUseCase, InstallShellUseCase, NotificationClickUseCase,
    ShowPushNotificationUseCase, SyncDocumentsUseCase,
};
use offline_agent_application::OfflineAgent;
use offline_agent_domain::config::NotificationsConfig;
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse, NotificationPayload};
use offline_agent_infrastructure::storage::MemoryCacheStorage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Scriptable network: responses keyed by URL, with a global offline switch.
pub struct ScriptedNetwork {
    responses: RwLock<HashMap<String, FetchResponse>>,
    offline: AtomicBool,
}

impl ScriptedNetwork {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub async fn serve(&self, url: &str, response: FetchResponse) {
        self.responses.write().await.insert(url.to_string(), response);
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl NetworkGateway for ScriptedNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, AgentError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AgentError::network_fetch(
                request.url.to_string(),
                "offline",
            ));
        }
        self.responses
            .read()
            .await
            .get(request.url.as_ref())
            .cloned()
            .ok_or_else(|| AgentError::network_fetch(request.url.to_string(), "no route"))
    }
}

/// Records host-side effects instead of performing them.
#[derive(Default)]
pub struct RecordingHost {
    pub focused: RwLock<Vec<String>>,
    pub notifications: RwLock<Vec<NotificationPayload>>,
}

#[async_trait]
impl ClientRegistry for RecordingHost {
    async fn skip_waiting(&self) -> Result<(), AgentError> {
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgentError> {
        Ok(())
    }

    async fn focus_or_open(&self, url: &str) -> Result<(), AgentError> {
        self.focused.write().await.push(url.to_string());
        Ok(())
    }
}

#[async_trait]
impl NotificationPresenter for RecordingHost {
    async fn show(&self, _title: &str, payload: &NotificationPayload) -> Result<(), AgentError> {
        self.notifications.write().await.push(payload.clone());
        Ok(())
    }

    async fn dismiss(&self, _tag: &str) -> Result<(), AgentError> {
        Ok(())
    }
}

/// Wires a complete agent over the in-memory storage backend.
pub fn build_agent(
    storage: Arc<MemoryCacheStorage>,
    network: Arc<ScriptedNetwork>,
    host: Arc<RecordingHost>,
    version: &str,
    manifest: Vec<String>,
) -> OfflineAgent {
    OfflineAgent::new(
        InstallShellUseCase::new(
            storage.clone(),
            network.clone(),
            host.clone(),
            version.to_string(),
            manifest,
        ),
        ActivateUseCase::new(storage.clone(), host.clone(), version.to_string()),
        HandleFetchUseCase::new(
            storage,
            network,
            version.to_string(),
            OFFLINE_PAGE.to_string(),
        ),
        SyncDocumentsUseCase::new(),
        ShowPushNotificationUseCase::new(host.clone(), NotificationsConfig::default()),
        NotificationClickUseCase::new(host.clone(), host, "/".to_string()),
        "sync-documents".to_string(),
    )
}
