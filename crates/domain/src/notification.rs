use serde::{Deserialize, Serialize};

/// Body text used when a push event arrives with no payload data.
pub const DEFAULT_PUSH_BODY: &str = "New update available";

/// Transient description of a system notification to display.
///
/// Built per push event, handed to the presenter, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub vibrate: Vec<u32>,
    pub tag: String,
    pub require_interaction: bool,
}
