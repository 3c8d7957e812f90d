use crate::ports::{ClientRegistry, NotificationPresenter};
use offline_agent_domain::AgentError;
use std::sync::Arc;
use tracing::info;

/// Use case: dismiss a clicked notification and surface the application.
pub struct NotificationClickUseCase {
    presenter: Arc<dyn NotificationPresenter>,
    clients: Arc<dyn ClientRegistry>,
    start_url: String,
}

impl NotificationClickUseCase {
    pub fn new(
        presenter: Arc<dyn NotificationPresenter>,
        clients: Arc<dyn ClientRegistry>,
        start_url: String,
    ) -> Self {
        Self {
            presenter,
            clients,
            start_url,
        }
    }

    pub async fn execute(&self, tag: &str) -> Result<(), AgentError> {
        info!(tag = %tag, "Notification clicked");

        self.presenter.dismiss(tag).await?;
        self.clients.focus_or_open(&self.start_url).await
    }
}
