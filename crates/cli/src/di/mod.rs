use anyhow::Context;
use offline_agent_application::ports::NetworkGateway;
use offline_agent_application::use_cases::{
    ActivateUseCase, HandleFetchUseCase, InstallShellUseCase, NotificationClickUseCase,
    ShowPushNotificationUseCase, SyncDocumentsUseCase,
};
use offline_agent_application::OfflineAgent;
use offline_agent_domain::Config;
use offline_agent_infrastructure::host::{TracingClientRegistry, TracingNotificationPresenter};
use offline_agent_infrastructure::net::ReqwestNetworkGateway;
use offline_agent_infrastructure::storage::SqliteCacheStorage;
use sqlx::SqlitePool;
use std::sync::Arc;
use url::Url;

/// Wired agent plus the bare gateway the harness uses for pass-through
/// requests the agent declines to handle.
pub struct AgentServices {
    pub agent: Arc<OfflineAgent>,
    pub network: Arc<dyn NetworkGateway>,
}

pub fn build_agent(config: &Config, pool: SqlitePool) -> anyhow::Result<AgentServices> {
    let origin = Url::parse(&config.server.origin)
        .with_context(|| format!("invalid origin '{}'", config.server.origin))?;

    let storage = Arc::new(SqliteCacheStorage::new(pool));
    let network: Arc<dyn NetworkGateway> = Arc::new(ReqwestNetworkGateway::new(origin));
    let clients = Arc::new(TracingClientRegistry::new());
    let presenter = Arc::new(TracingNotificationPresenter::new());

    let cache_name = config.cache.version.clone();

    let agent = OfflineAgent::new(
        InstallShellUseCase::new(
            storage.clone(),
            network.clone(),
            clients.clone(),
            cache_name.clone(),
            config.cache.precache.clone(),
        ),
        ActivateUseCase::new(storage.clone(), clients.clone(), cache_name.clone()),
        HandleFetchUseCase::new(
            storage.clone(),
            network.clone(),
            cache_name,
            config.cache.offline_fallback.clone(),
        ),
        SyncDocumentsUseCase::new(),
        ShowPushNotificationUseCase::new(presenter.clone(), config.notifications.clone()),
        NotificationClickUseCase::new(presenter, clients, config.server.start_url.clone()),
        config.sync.documents_tag.clone(),
    );

    Ok(AgentServices {
        agent: Arc::new(agent),
        network,
    })
}
