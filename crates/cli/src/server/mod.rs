use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use bytes::Bytes;
use offline_agent_application::ports::NetworkGateway;
use offline_agent_application::use_cases::FetchOutcome;
use offline_agent_application::{AgentEvent, EventOutcome, OfflineAgent};
use offline_agent_domain::{FetchRequest, FetchResponse, Method};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Host harness: raises lifecycle events against the agent over HTTP.
///
/// Every request that is not one of the `/__agent` trigger routes is treated
/// as an intercepted page request and routed through the fetch handler.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<OfflineAgent>,
    pub network: Arc<dyn NetworkGateway>,
    pub documents_tag: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/__agent/sync", post(trigger_sync))
        .route("/__agent/push", post(trigger_push))
        .route("/__agent/notification-click", post(trigger_notification_click))
        .fallback(intercept)
        .with_state(state)
}

async fn intercept(State(state): State<AppState>, request: Request) -> Response {
    let intercepted = match into_fetch_request(request).await {
        Ok(req) => req,
        Err(response) => return response,
    };

    match state.agent.handle_fetch(&intercepted).await {
        Ok(FetchOutcome::Response { response, .. }) => into_axum_response(response),
        Ok(FetchOutcome::PassThrough) => {
            // Not a retrieval request: forward untouched, no caching.
            match state.network.fetch(&intercepted).await {
                Ok(response) => into_axum_response(response),
                Err(e) => {
                    warn!(url = %intercepted.url, error = %e, "Pass-through fetch failed");
                    StatusCode::BAD_GATEWAY.into_response()
                }
            }
        }
        Err(e) => {
            // No cached entry, no network, no offline page: surfaces as a
            // failed load in the requesting page.
            error!(url = %intercepted.url, error = %e, "Fetch unserviceable");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

async fn into_fetch_request(request: Request) -> Result<FetchRequest, Response> {
    let method: Method = match request.method().as_str().parse() {
        Ok(method) => method,
        Err(_) => return Err(StatusCode::NOT_IMPLEMENTED.into_response()),
    };

    let url = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let headers: Vec<(String, String)> = request
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => Some(bytes),
        Err(_) => return Err(StatusCode::BAD_REQUEST.into_response()),
    };

    let mut fetch_request = FetchRequest::new(method, url);
    fetch_request.headers = headers;
    fetch_request.body = body;
    Ok(fetch_request)
}

fn into_axum_response(response: FetchResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    let mut builder = Response::builder().status(status);

    if let Some(headers) = builder.headers_mut() {
        for (name, value) in &response.headers {
            // Length is recomputed for the replayed body; hop-by-hop framing
            // headers from the stored response would conflict with it.
            if name.eq_ignore_ascii_case("content-length")
                || name.eq_ignore_ascii_case("transfer-encoding")
            {
                continue;
            }
            if let (Ok(name), Ok(value)) = (
                name.parse::<HeaderName>(),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
    }

    builder
        .body(Body::from(response.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[derive(Debug, Deserialize, Default)]
struct SyncTrigger {
    tag: Option<String>,
}

async fn trigger_sync(
    State(state): State<AppState>,
    payload: Option<Json<SyncTrigger>>,
) -> Response {
    let tag = payload
        .and_then(|Json(trigger)| trigger.tag)
        .unwrap_or_else(|| state.documents_tag.clone());

    match state.agent.dispatch(AgentEvent::Sync { tag }).await {
        Ok(EventOutcome::Synced) => StatusCode::NO_CONTENT.into_response(),
        Ok(EventOutcome::Ignored) => (StatusCode::OK, "ignored").into_response(),
        Ok(_) | Err(_) => {
            // A rejected sync tells the caller to reschedule.
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn trigger_push(State(state): State<AppState>, body: Bytes) -> Response {
    let data = if body.is_empty() { None } else { Some(body) };

    match state.agent.dispatch(AgentEvent::Push { data }).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Push handling failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ClickTrigger {
    tag: Option<String>,
}

async fn trigger_notification_click(
    State(state): State<AppState>,
    payload: Option<Json<ClickTrigger>>,
) -> Response {
    let tag = payload
        .and_then(|Json(trigger)| trigger.tag)
        .unwrap_or_default();

    match state.agent.dispatch(AgentEvent::NotificationClick { tag }).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Notification click handling failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
