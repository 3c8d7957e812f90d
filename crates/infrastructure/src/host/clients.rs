use async_trait::async_trait;
use offline_agent_application::ports::ClientRegistry;
use offline_agent_domain::AgentError;
use tracing::info;

/// Window client control surfaced through the log.
///
/// In this embedding there is no windowing host to delegate to, so the
/// requests the agent would hand off are recorded as structured log events.
pub struct TracingClientRegistry;

impl TracingClientRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRegistry for TracingClientRegistry {
    async fn skip_waiting(&self) -> Result<(), AgentError> {
        info!("Superseding any waiting agent instance");
        Ok(())
    }

    async fn claim(&self) -> Result<(), AgentError> {
        info!("Claiming all open pages");
        Ok(())
    }

    async fn focus_or_open(&self, url: &str) -> Result<(), AgentError> {
        info!(url = %url, "Focus or open window");
        Ok(())
    }
}
