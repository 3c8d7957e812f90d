use async_trait::async_trait;
use offline_agent_application::ports::NetworkGateway;
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse, Method, ResponseKind};
use tracing::debug;
use url::Url;

/// Network gateway over reqwest.
///
/// Requests are issued with the intercepted method, headers and body.
/// Responses are classified against the configured application origin:
/// a final URL on that origin is `basic`, anything else is cross-origin.
/// A final URL differing from the requested one marks the response
/// redirected. No timeout is imposed here beyond reqwest's own defaults.
pub struct ReqwestNetworkGateway {
    client: reqwest::Client,
    origin: Url,
}

impl ReqwestNetworkGateway {
    pub fn new(origin: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin,
        }
    }

    /// Resolves possibly-relative manifest paths against the app origin.
    fn resolve(&self, url: &str) -> Result<Url, AgentError> {
        self.origin
            .join(url)
            .map_err(|e| AgentError::InvalidUrl(format!("{url}: {e}")))
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Head => reqwest::Method::HEAD,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Patch => reqwest::Method::PATCH,
    }
}

#[async_trait]
impl NetworkGateway for ReqwestNetworkGateway {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, AgentError> {
        let url = self.resolve(request.url.as_ref())?;

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AgentError::network_fetch(request.url.to_string(), e))?;

        let final_url = response.url().clone();
        let redirected = final_url != url;
        let kind = if final_url.origin() == self.origin.origin() {
            ResponseKind::Basic
        } else {
            ResponseKind::Cors
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| AgentError::network_fetch(request.url.to_string(), e))?;

        debug!(url = %final_url, status, kind = %kind, redirected, "Network response");

        Ok(FetchResponse {
            status,
            headers,
            body,
            kind,
            redirected,
        })
    }
}
