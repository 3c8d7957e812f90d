use async_trait::async_trait;
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse};

/// Outgoing network access.
///
/// Implementations issue the request with its exact method, headers and body,
/// and classify the response (basic / cors / opaque, redirected) so the fetch
/// strategy can decide cacheability.
#[async_trait]
pub trait NetworkGateway: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, AgentError>;
}
