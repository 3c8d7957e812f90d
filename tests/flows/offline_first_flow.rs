//! Offline-first flow
//!
//! Install populates the shell, the network goes away, and pages keep
//! loading from the cache; anything never cached falls back to the offline
//! page.

#[path = "../common/mod.rs"]
mod common;

use common::{build_agent, page, shell_manifest, RecordingHost, ScriptedNetwork, OFFLINE_PAGE};
use offline_agent_application::use_cases::{FetchOutcome, ServedFrom};
use offline_agent_application::{AgentEvent, EventOutcome};
use offline_agent_domain::FetchRequest;
use offline_agent_infrastructure::storage::MemoryCacheStorage;
use std::sync::Arc;

async fn serve_shell(network: &ScriptedNetwork) {
    network.serve("/", page("<html>shell</html>")).await;
    network.serve("/static/manifest.json", page("{}")).await;
    network.serve(OFFLINE_PAGE, page("you are offline")).await;
}

#[tokio::test]
async fn shell_survives_going_offline() {
    // Arrange: install and activate while online
    let storage = Arc::new(MemoryCacheStorage::new());
    let network = Arc::new(ScriptedNetwork::new());
    let host = Arc::new(RecordingHost::default());
    serve_shell(&network).await;
    let agent = build_agent(storage, network.clone(), host, "v1", shell_manifest());

    let installed = agent.dispatch(AgentEvent::Install).await.unwrap();
    assert!(matches!(installed, EventOutcome::Installed { cached: 3 }));
    agent.dispatch(AgentEvent::Activate).await.unwrap();

    // Act: the network disappears
    network.go_offline();

    // Assert: the shell still loads, from cache
    let outcome = agent.handle_fetch(&FetchRequest::get("/")).await.unwrap();
    match outcome {
        FetchOutcome::Response { response, served } => {
            assert_eq!(served, ServedFrom::Cache);
            assert_eq!(response.body.as_ref(), b"<html>shell</html>");
        }
        FetchOutcome::PassThrough => panic!("expected a cached response"),
    }
}

#[tokio::test]
async fn uncached_page_gets_offline_fallback() {
    let storage = Arc::new(MemoryCacheStorage::new());
    let network = Arc::new(ScriptedNetwork::new());
    let host = Arc::new(RecordingHost::default());
    serve_shell(&network).await;
    let agent = build_agent(storage, network.clone(), host, "v1", shell_manifest());

    agent.dispatch(AgentEvent::Install).await.unwrap();
    agent.dispatch(AgentEvent::Activate).await.unwrap();
    network.go_offline();

    let outcome = agent
        .handle_fetch(&FetchRequest::get("/missing.png"))
        .await
        .unwrap();

    match outcome {
        FetchOutcome::Response { response, served } => {
            assert_eq!(served, ServedFrom::OfflineFallback);
            assert_eq!(response.body.as_ref(), b"you are offline");
        }
        FetchOutcome::PassThrough => panic!("expected the offline page"),
    }
}

#[tokio::test]
async fn browsing_online_extends_the_cache() {
    let storage = Arc::new(MemoryCacheStorage::new());
    let network = Arc::new(ScriptedNetwork::new());
    let host = Arc::new(RecordingHost::default());
    serve_shell(&network).await;
    network.serve("/reports/today", page("report")).await;
    let agent = build_agent(storage, network.clone(), host, "v1", shell_manifest());

    agent.dispatch(AgentEvent::Install).await.unwrap();
    agent.dispatch(AgentEvent::Activate).await.unwrap();

    // Visit a page while online, then lose the network.
    let request = FetchRequest::get("/reports/today");
    agent.handle_fetch(&request).await.unwrap();
    network.go_offline();

    let outcome = agent.handle_fetch(&request).await.unwrap();
    match outcome {
        FetchOutcome::Response { served, .. } => assert_eq!(served, ServedFrom::Cache),
        FetchOutcome::PassThrough => panic!("expected a cached response"),
    }
}

#[tokio::test]
async fn failed_install_leaves_agent_usable() {
    // Only part of the shell is reachable.
    let storage = Arc::new(MemoryCacheStorage::new());
    let network = Arc::new(ScriptedNetwork::new());
    let host = Arc::new(RecordingHost::default());
    network.serve("/", page("<html>shell</html>")).await;
    let agent = build_agent(
        storage,
        network.clone(),
        host,
        "v1",
        shell_manifest(),
    );

    let installed = agent.dispatch(AgentEvent::Install).await;
    assert!(installed.is_err());

    // What made it into the store before the failure is still served.
    network.go_offline();
    let outcome = agent.handle_fetch(&FetchRequest::get("/")).await.unwrap();
    match outcome {
        FetchOutcome::Response { served, .. } => assert_eq!(served, ServedFrom::Cache),
        FetchOutcome::PassThrough => panic!("expected a cached response"),
    }
}
