use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Invalid cache version: {0}")]
    InvalidCacheVersion(String),

    #[error("Install manifest is empty")]
    EmptyManifest,

    #[error("Invalid origin '{0}': expected an absolute URL")]
    InvalidOrigin(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}
