use offline_agent_domain::AgentError;
use tracing::info;

/// Use case: synchronize locally created documents once connectivity returns.
///
/// Extension point. The sync queue and its transport are not specified yet,
/// so this settles successfully without doing any work. The result is
/// surfaced to the host so a failing implementation can be rescheduled.
pub struct SyncDocumentsUseCase;

impl SyncDocumentsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<(), AgentError> {
        info!("Syncing documents");
        Ok(())
    }
}

impl Default for SyncDocumentsUseCase {
    fn default() -> Self {
        Self::new()
    }
}
