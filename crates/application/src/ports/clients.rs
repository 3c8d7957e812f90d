use async_trait::async_trait;
use offline_agent_domain::AgentError;

/// Control over the pages this agent serves, delegated to the host.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Signal that this agent should supersede any waiting predecessor
    /// without waiting for existing pages to close.
    async fn skip_waiting(&self) -> Result<(), AgentError>;

    /// Take control of all currently open pages without a reload.
    async fn claim(&self) -> Result<(), AgentError>;

    /// Bring an application window showing `url` into focus, opening one if
    /// none exists.
    async fn focus_or_open(&self, url: &str) -> Result<(), AgentError>;
}
