use super::{
    CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, NotificationsConfig, ServerConfig,
    SyncConfig,
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration, loaded from an optional TOML file with CLI overrides
/// applied on top. Every section falls back to compiled-in defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Command-line overrides applied after file parsing.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
                        path: path.to_string(),
                        source,
                    })?;
                toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?
            }
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.version.trim().is_empty() {
            return Err(ConfigError::InvalidCacheVersion(self.cache.version.clone()));
        }
        if self.cache.precache.is_empty() {
            return Err(ConfigError::EmptyManifest);
        }
        if Url::parse(&self.server.origin).is_err() {
            return Err(ConfigError::InvalidOrigin(self.server.origin.clone()));
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        Ok(())
    }
}
