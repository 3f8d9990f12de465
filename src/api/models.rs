use schemars::JsonSchema;
use serde::Deserialize;

use crate::formatter::DEFAULT_RESULT_LIMIT;

fn default_count() -> i64 {
    DEFAULT_RESULT_LIMIT
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search terms, passed to the aggregator as-is.
    pub query: String,
    /// How many organic results to include in the digest.
    #[serde(default = "default_count")]
    pub count: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WebUrlReadParams {
    /// Absolute http(s) URL of the page to read.
    pub url: String,
}
