//! Configuration module for the Offline Agent
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Host harness binding and application origin
//! - `cache`: Cache version tag, install manifest, offline fallback
//! - `notifications`: Push notification presentation
//! - `sync`: Background sync tags
//! - `logging`: Logging settings
//! - `database`: Persistent cache store backing file
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod notifications;
pub mod root;
pub mod server;
pub mod sync;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use notifications::NotificationsConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use sync::SyncConfig;
