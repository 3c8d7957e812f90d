use serde::{Deserialize, Serialize};

/// Cache lifecycle configuration.
///
/// `version` names the current cache store. Bumping it is the sole supported
/// mechanism for invalidating previously cached entries: every store whose
/// name differs from the current version is deleted during activation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Version tag naming the current cache store
    #[serde(default = "default_version")]
    pub version: String,

    /// App shell URLs fetched and stored at install time
    #[serde(default = "default_precache")]
    pub precache: Vec<String>,

    /// Page served from cache when both cache and network fail
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            precache: default_precache(),
            offline_fallback: default_offline_fallback(),
        }
    }
}

fn default_version() -> String {
    "app-shell-v1".to_string()
}

fn default_precache() -> Vec<String> {
    vec!["/".to_string(), "/static/manifest.json".to_string()]
}

fn default_offline_fallback() -> String {
    "/offline.html".to_string()
}
