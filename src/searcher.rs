use tracing::debug;

use crate::config::SearxngConfig;
use crate::data_models::SearchResponse;
use crate::error::{Error, Result};
use crate::formatter::format_digest;

/// Engine pinned by the `web_search` tool.
pub const WEB_SEARCH_ENGINE: &str = "google";

/// One query against the aggregator. `engines = None` lets the aggregator
/// use every engine it has enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub engines: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            engines: None,
        }
    }

    pub fn with_engines(mut self, engines: impl Into<String>) -> SearchRequest {
        self.engines = Some(engines.into());
        self
    }

    fn query_params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![("q", self.query.as_str()), ("format", "json")];
        if let Some(engines) = &self.engines {
            params.push(("engines", engines.as_str()));
        }
        params
    }
}

/// Thin client over the aggregator's JSON search API.
///
/// Every failure (status, transport, body shape) is returned to the caller
/// untouched; nothing here retries or recovers.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: SearxngConfig,
}

impl SearchClient {
    pub fn new(config: SearxngConfig) -> SearchClient {
        SearchClient { config }
    }

    /// Digest of up to `limit` results from all enabled engines.
    pub async fn search(&self, query: &str, limit: i64) -> Result<String> {
        self.digest(&SearchRequest::new(query), limit).await
    }

    /// Digest of up to `count` results from the engine pinned for the tool.
    pub async fn web_search(&self, query: &str, count: i64) -> Result<String> {
        let request = SearchRequest::new(query).with_engines(WEB_SEARCH_ENGINE);
        self.digest(&request, count).await
    }

    pub async fn digest(&self, request: &SearchRequest, limit: i64) -> Result<String> {
        let response = self.fetch_response(request).await?;
        Ok(format_digest(&response, limit))
    }

    pub async fn fetch_response(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let endpoint = self.config.search_endpoint()?;
        debug!(query = %request.query, engines = ?request.engines, %endpoint, "searching");

        let client = reqwest::Client::new();
        let res = client
            .get(endpoint)
            .query(&request.query_params())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), &body));
        }

        let body = res.text().await?;
        let response = SearchResponse::from_json(&body)?;
        debug!(
            results = response.results.len(),
            infoboxes = response.infoboxes.len(),
            "search response parsed"
        );
        Ok(response)
    }
}

#[test]
fn test_query_params() {
    let request = SearchRequest::new("rust lang");
    assert_eq!(
        request.query_params(),
        vec![("q", "rust lang"), ("format", "json")]
    );

    let request = request.with_engines(WEB_SEARCH_ENGINE);
    assert_eq!(
        request.query_params(),
        vec![("q", "rust lang"), ("format", "json"), ("engines", "google")]
    );
}
