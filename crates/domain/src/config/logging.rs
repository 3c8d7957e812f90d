use serde::{Deserialize, Serialize};

/// Logging configuration for the agent and its host harness.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Verbosity of the agent's structured log output (default: "info").
    /// "debug" additionally surfaces per-request cache HIT/MISS lines.
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
