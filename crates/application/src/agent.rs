use crate::use_cases::{
    ActivateUseCase, FetchOutcome, HandleFetchUseCase, InstallShellUseCase,
    NotificationClickUseCase, ShowPushNotificationUseCase, SyncDocumentsUseCase,
};
use bytes::Bytes;
use offline_agent_domain::{AgentError, FetchRequest};
use tracing::{debug, error};

/// Lifecycle events raised by the host runtime.
///
/// There is no caller-invoked API; every entry point into the agent is one of
/// these externally triggered events.
#[derive(Debug)]
pub enum AgentEvent {
    Install,
    Activate,
    Fetch(FetchRequest),
    Sync { tag: String },
    Push { data: Option<Bytes> },
    NotificationClick { tag: String },
}

/// What a settled event produced.
#[derive(Debug)]
pub enum EventOutcome {
    Installed { cached: u64 },
    Activated { deleted: u64 },
    Fetch(FetchOutcome),
    Synced,
    NotificationShown,
    WindowFocused,
    /// The event carried a tag this agent does not handle.
    Ignored,
}

/// The agent itself: a fixed set of handlers keyed by event type.
///
/// `dispatch` returns only once the event's asynchronous work has settled;
/// the host must await it before considering the event finished (the
/// "extend the event lifetime" contract). Handlers share no mutable state,
/// the cache storage behind the use cases is the sole shared resource.
pub struct OfflineAgent {
    install: InstallShellUseCase,
    activate: ActivateUseCase,
    fetch: HandleFetchUseCase,
    sync_documents: SyncDocumentsUseCase,
    push: ShowPushNotificationUseCase,
    notification_click: NotificationClickUseCase,
    documents_tag: String,
}

impl OfflineAgent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        install: InstallShellUseCase,
        activate: ActivateUseCase,
        fetch: HandleFetchUseCase,
        sync_documents: SyncDocumentsUseCase,
        push: ShowPushNotificationUseCase,
        notification_click: NotificationClickUseCase,
        documents_tag: String,
    ) -> Self {
        Self {
            install,
            activate,
            fetch,
            sync_documents,
            push,
            notification_click,
            documents_tag,
        }
    }

    pub async fn dispatch(&self, event: AgentEvent) -> Result<EventOutcome, AgentError> {
        match event {
            AgentEvent::Install => {
                let cached = self.install.execute().await?;
                Ok(EventOutcome::Installed { cached })
            }
            AgentEvent::Activate => {
                let deleted = self.activate.execute().await?;
                Ok(EventOutcome::Activated { deleted })
            }
            AgentEvent::Fetch(request) => {
                let outcome = self.fetch.execute(&request).await?;
                Ok(EventOutcome::Fetch(outcome))
            }
            AgentEvent::Sync { tag } => {
                if tag != self.documents_tag {
                    debug!(tag = %tag, "Ignoring sync event with unknown tag");
                    return Ok(EventOutcome::Ignored);
                }
                match self.sync_documents.execute().await {
                    Ok(()) => Ok(EventOutcome::Synced),
                    Err(e) => {
                        // Surfaced so the host can reschedule the sync.
                        error!(error = %e, "Document sync failed");
                        Err(e)
                    }
                }
            }
            AgentEvent::Push { data } => {
                self.push.execute(data).await?;
                Ok(EventOutcome::NotificationShown)
            }
            AgentEvent::NotificationClick { tag } => {
                self.notification_click.execute(&tag).await?;
                Ok(EventOutcome::WindowFocused)
            }
        }
    }

    /// Direct access for hosts that route intercepted requests themselves.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> Result<FetchOutcome, AgentError> {
        self.fetch.execute(request).await
    }
}
