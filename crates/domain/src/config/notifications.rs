use crate::notification::NotificationPayload;
use serde::{Deserialize, Serialize};

/// Push notification presentation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationsConfig {
    /// Title shown on every notification
    #[serde(default = "default_title")]
    pub title: String,

    /// Icon asset path
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Badge asset path
    #[serde(default = "default_icon")]
    pub badge: String,

    /// Vibration pattern in milliseconds
    #[serde(default = "default_vibrate")]
    pub vibrate: Vec<u32>,

    /// Tag grouping notifications from this agent
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Keep the notification visible until the user interacts with it
    #[serde(default = "default_require_interaction")]
    pub require_interaction: bool,
}

impl NotificationsConfig {
    /// Payload template for one push event; the caller fills in the body.
    pub fn payload(&self, body: impl Into<String>) -> NotificationPayload {
        NotificationPayload {
            body: body.into(),
            icon: self.icon.clone(),
            badge: self.badge.clone(),
            vibrate: self.vibrate.clone(),
            tag: self.tag.clone(),
            require_interaction: self.require_interaction,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            badge: default_icon(),
            vibrate: default_vibrate(),
            tag: default_tag(),
            require_interaction: default_require_interaction(),
        }
    }
}

fn default_title() -> String {
    "Offline Agent".to_string()
}

fn default_icon() -> String {
    "/static/images/icon-192.png".to_string()
}

fn default_vibrate() -> Vec<u32> {
    vec![200, 100, 200]
}

fn default_tag() -> String {
    "offline-agent-notification".to_string()
}

fn default_require_interaction() -> bool {
    true
}
