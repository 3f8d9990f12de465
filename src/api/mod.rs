use axum::Router;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::fetcher::PageFetcher;
use crate::searcher::SearchClient;

pub mod models;
pub mod tools;

pub use tools::SearxngTools;

pub const SSE_PATH: &str = "/sse";
pub const MESSAGES_PATH: &str = "/messages/";

/// Builds the SSE transport and its HTTP routes. Every new SSE session is
/// served by a fresh [`SearxngTools`] built from `config`.
///
/// The returned token shuts down both the sessions and the transport.
pub fn create_router(
    config: &ServerConfig,
    bind: SocketAddr,
    ct: CancellationToken,
) -> (Router, CancellationToken) {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let (sse_server, router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: SSE_PATH.to_string(),
        post_path: MESSAGES_PATH.to_string(),
        ct,
        sse_keep_alive: None,
    });

    let search_client = SearchClient::new(config.searxng.clone());
    let page_fetcher = PageFetcher::with_default_converter(config.fetcher.clone());
    let service_ct = sse_server.with_service(move || {
        SearxngTools::new(search_client.clone(), page_fetcher.clone())
    });

    (router.layer(cors), service_ct)
}
