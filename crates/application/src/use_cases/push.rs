use crate::ports::NotificationPresenter;
use bytes::Bytes;
use offline_agent_domain::config::NotificationsConfig;
use offline_agent_domain::{notification::DEFAULT_PUSH_BODY, AgentError};
use std::sync::Arc;
use tracing::info;

/// Use case: render a push event as a system notification.
///
/// The event data, when present, is taken as UTF-8 text and becomes the
/// notification body; a payload-less push falls back to a fixed placeholder.
pub struct ShowPushNotificationUseCase {
    presenter: Arc<dyn NotificationPresenter>,
    config: NotificationsConfig,
}

impl ShowPushNotificationUseCase {
    pub fn new(presenter: Arc<dyn NotificationPresenter>, config: NotificationsConfig) -> Self {
        Self { presenter, config }
    }

    pub async fn execute(&self, data: Option<Bytes>) -> Result<(), AgentError> {
        let body = match data {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => DEFAULT_PUSH_BODY.to_string(),
        };

        info!(tag = %self.config.tag, "Push notification received");

        let payload = self.config.payload(body);
        self.presenter.show(&self.config.title, &payload).await
    }
}
