use async_trait::async_trait;
use offline_agent_application::ports::NotificationPresenter;
use offline_agent_domain::{AgentError, NotificationPayload};
use tracing::info;

/// Notification display surfaced through the log.
pub struct TracingNotificationPresenter;

impl TracingNotificationPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingNotificationPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for TracingNotificationPresenter {
    async fn show(&self, title: &str, payload: &NotificationPayload) -> Result<(), AgentError> {
        info!(
            title = %title,
            body = %payload.body,
            tag = %payload.tag,
            icon = %payload.icon,
            require_interaction = payload.require_interaction,
            "Show notification"
        );
        Ok(())
    }

    async fn dismiss(&self, tag: &str) -> Result<(), AgentError> {
        info!(tag = %tag, "Dismiss notification");
        Ok(())
    }
}
