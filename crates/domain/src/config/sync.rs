use serde::{Deserialize, Serialize};

/// Background sync configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Tag identifying document synchronization events; sync events with any
    /// other tag are acknowledged and ignored
    #[serde(default = "default_documents_tag")]
    pub documents_tag: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            documents_tag: default_documents_tag(),
        }
    }
}

fn default_documents_tag() -> String {
    "sync-documents".to_string()
}
