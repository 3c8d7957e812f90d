//! Offline Agent Domain Layer
pub mod config;
pub mod errors;
pub mod notification;
pub mod request;
pub mod response;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::AgentError;
pub use notification::NotificationPayload;
pub use request::{FetchRequest, Method};
pub use response::{FetchResponse, ResponseKind};
