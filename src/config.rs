use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const SEARXNG_URL_ENV: &str = "SEARXNG_URL";
pub const DEFAULT_SEARXNG_URL: &str = "http://localhost:8080";

pub const DEFAULT_USER_AGENT: &str = "MCP-SEARXNG";
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the aggregator lives.
#[derive(Debug, Clone, PartialEq)]
pub struct SearxngConfig {
    pub base_url: Url,
}

impl SearxngConfig {
    pub fn new(base_url: &str) -> Result<SearxngConfig> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(SearxngConfig { base_url })
    }

    /// `{base_url}/search`, keeping any path prefix of the base. Query and
    /// fragment of the base are dropped.
    pub fn search_endpoint(&self) -> Result<Url> {
        let mut endpoint = self.base_url.clone();
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        endpoint
            .path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("search");
        Ok(endpoint)
    }
}

impl Default for SearxngConfig {
    fn default() -> SearxngConfig {
        SearxngConfig {
            base_url: Url::parse(DEFAULT_SEARXNG_URL).expect("default searxng url is valid"),
        }
    }
}

/// Knobs for reading arbitrary pages.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub max_redirects: usize,
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> FetcherConfig {
        FetcherConfig {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Process-level settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub searxng: SearxngConfig,
    pub fetcher: FetcherConfig,
}

impl ServerConfig {
    /// `SEARXNG_URL` in the environment wins over the command-line value.
    pub fn resolve(host: String, port: u16, cli_searxng_url: &str) -> Result<ServerConfig> {
        dotenv().ok();
        let searxng_url = get_env_or_default(SEARXNG_URL_ENV, cli_searxng_url);
        Ok(ServerConfig {
            host,
            port,
            searxng: SearxngConfig::new(&searxng_url)?,
            fetcher: FetcherConfig::default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
