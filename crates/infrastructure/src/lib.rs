//! Offline Agent Infrastructure Layer
//!
//! Adapters behind the application ports: cache storage backends (in-memory
//! and SQLite), the reqwest network gateway, and tracing-backed host
//! surfaces for notifications and window clients.
pub mod database;
pub mod host;
pub mod net;
pub mod storage;
