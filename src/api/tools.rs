use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tracing::{error, info};

use crate::fetcher::PageFetcher;
use crate::searcher::SearchClient;

use super::models::{WebSearchParams, WebUrlReadParams};

pub const SERVER_NAME: &str = "mcp-searxng";

const INSTRUCTIONS: &str = "Use web_search to find pages on a topic, then web_url_read to read the pages worth following up.";

/// The two tools exposed to agents. One instance is built per session.
#[derive(Clone)]
pub struct SearxngTools {
    tool_router: ToolRouter<Self>,
    search_client: SearchClient,
    page_fetcher: PageFetcher,
}

#[tool_router]
impl SearxngTools {
    pub fn new(search_client: SearchClient, page_fetcher: PageFetcher) -> Self {
        Self {
            tool_router: Self::tool_router(),
            search_client,
            page_fetcher,
        }
    }

    #[tool(
        description = "Performs a web search using the SearxNG API, ideal for general queries, news, articles, and online content. Use this for broad information gathering, recent events, or when you need diverse web sources."
    )]
    pub async fn web_search(
        &self,
        Parameters(params): Parameters<WebSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(query = %params.query, count = params.count, "web_search");
        let digest = self
            .search_client
            .web_search(&params.query, params.count)
            .await
            .map_err(|e| {
                error!(query = %params.query, "web_search failed: {e}");
                McpError::internal_error(format!("Search failed: {e}"), None)
            })?;

        Ok(CallToolResult::success(vec![Content::text(digest)]))
    }

    #[tool(
        description = "Read the content from an URL. Use this for further information retrieving to understand the content of each URL."
    )]
    pub async fn web_url_read(
        &self,
        Parameters(params): Parameters<WebUrlReadParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(url = %params.url, "web_url_read");
        // A failed read is an empty result, not a failed call.
        let content = match self.page_fetcher.fetch_readable(&params.url).await {
            Some(text) => vec![Content::text(text)],
            None => Vec::new(),
        };
        Ok(CallToolResult::success(content))
    }
}

#[tool_handler]
impl ServerHandler for SearxngTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
