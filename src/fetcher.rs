use html2text::from_read;
use reqwest::redirect::Policy;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::FetcherConfig;
use crate::error::{Error, Result};

pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Turns a fetched HTML document into something a reader (human or model) can use.
pub trait HtmlToText: Send + Sync {
    fn convert(&self, html: &str) -> Result<String>;
}

/// [`HtmlToText`] backed by `html2text`, which keeps headings, links and lists
/// in a markdown-like shape.
#[derive(Debug, Clone)]
pub struct Html2TextConverter {
    width: usize,
}

impl Html2TextConverter {
    pub fn new(width: usize) -> Html2TextConverter {
        Html2TextConverter { width }
    }
}

impl Default for Html2TextConverter {
    fn default() -> Html2TextConverter {
        Html2TextConverter::new(DEFAULT_WRAP_WIDTH)
    }
}

impl HtmlToText for Html2TextConverter {
    fn convert(&self, html: &str) -> Result<String> {
        from_read(html.as_bytes(), self.width).map_err(|e| Error::Conversion(e.to_string()))
    }
}

/// Reads arbitrary pages for the `web_url_read` tool.
///
/// Failures never escape: they are logged and reported as `None`, so one bad
/// URL does not stop a caller working through a list of them.
#[derive(Clone)]
pub struct PageFetcher {
    config: FetcherConfig,
    converter: Arc<dyn HtmlToText>,
}

impl PageFetcher {
    pub fn new(config: FetcherConfig, converter: Arc<dyn HtmlToText>) -> PageFetcher {
        PageFetcher { config, converter }
    }

    pub fn with_default_converter(config: FetcherConfig) -> PageFetcher {
        PageFetcher::new(config, Arc::new(Html2TextConverter::default()))
    }

    pub async fn fetch_readable(&self, url: &str) -> Option<String> {
        match self.try_fetch_readable(url).await {
            Ok(text) => Some(text),
            Err(Error::HttpStatus { status, .. }) => {
                error!(url = %url, status, "HTTP error fetching URL {url}: status {status}");
                None
            }
            Err(e) => {
                error!(url = %url, "Unexpected error fetching URL {url}: {e}");
                None
            }
        }
    }

    /// Same as [`PageFetcher::fetch_readable`] but hands the failure back.
    pub async fn try_fetch_readable(&self, url: &str) -> Result<String> {
        let html = self.fetch_page(url).await?;
        self.converter.convert(&html)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .redirect(Policy::limited(self.config.max_redirects))
            .timeout(self.config.timeout)
            .build()?;

        debug!(url = %url, "fetching page");
        let res = client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), &body));
        }
        Ok(res.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FailingConverter;

    impl HtmlToText for FailingConverter {
        fn convert(&self, _html: &str) -> Result<String> {
            Err(Error::Conversion("broken markup".to_string()))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_not_found_logs_url_once() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        let fetcher = PageFetcher::with_default_converter(FetcherConfig::default());

        assert_eq!(fetcher.fetch_readable(&url).await, None);
        assert!(logs_contain(&url));
        logs_assert(|lines: &[&str]| {
            let errors = lines
                .iter()
                .filter(|line| line.contains("ERROR") && line.contains("fetching URL"))
                .count();
            if errors == 1 {
                Ok(())
            } else {
                Err(format!("expected one error entry, found {errors}"))
            }
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn test_conversion_failure_is_recovered() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/page", mock_server.uri());
        let fetcher = PageFetcher::new(FetcherConfig::default(), Arc::new(FailingConverter));

        assert_eq!(fetcher.fetch_readable(&url).await, None);
        assert!(logs_contain("broken markup"));
        assert!(logs_contain(&url));
    }

    #[test]
    fn test_html2text_converter() {
        let converter = Html2TextConverter::default();
        let text = converter
            .convert("<html><body><h1>Cats</h1><p>Feline info</p></body></html>")
            .unwrap();
        assert!(text.contains("Cats"));
        assert!(text.contains("Feline info"));
        assert!(!text.contains("<p>"));
    }
}
