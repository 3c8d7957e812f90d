use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Cache store '{store}' error: {message}")]
    CacheStore { store: String, message: String },

    #[error("Shell population failed for '{url}': {message}")]
    ShellPopulation { url: String, message: String },

    #[error("Network fetch failed for '{url}': {message}")]
    NetworkFetch { url: String, message: String },

    #[error("No cached entry and no offline fallback for '{0}'")]
    Unserviceable(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Window client error: {0}")]
    WindowClient(String),

    #[error("Document sync failed: {0}")]
    SyncFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl AgentError {
    pub fn cache_store(store: impl Into<String>, message: impl ToString) -> Self {
        Self::CacheStore {
            store: store.into(),
            message: message.to_string(),
        }
    }

    pub fn network_fetch(url: impl Into<String>, message: impl ToString) -> Self {
        Self::NetworkFetch {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
