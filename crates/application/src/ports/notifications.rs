use async_trait::async_trait;
use offline_agent_domain::{AgentError, NotificationPayload};

/// System notification display, delegated to the host.
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    async fn show(&self, title: &str, payload: &NotificationPayload) -> Result<(), AgentError>;

    /// Dismiss any visible notification carrying the given tag.
    async fn dismiss(&self, tag: &str) -> Result<(), AgentError>;
}
