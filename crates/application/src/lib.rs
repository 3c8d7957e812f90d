//! Offline Agent Application Layer
//!
//! Ports (traits implemented by infrastructure) and one use case per
//! lifecycle event, tied together by the [`agent::OfflineAgent`] dispatcher.
pub mod agent;
pub mod ports;
pub mod use_cases;

pub use agent::{AgentEvent, EventOutcome, OfflineAgent};
