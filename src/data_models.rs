use serde::{Deserialize, Serialize};

/// One organic hit from the aggregator's `results` array.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InfoboxUrl {
    pub title: String,
    pub url: String,
}

/// Knowledge-panel entry returned next to the organic results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Infobox {
    pub infobox: String,
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub urls: Vec<InfoboxUrl>,
}

/// Deserialization target for `GET /search?format=json`.
///
/// Only `results` is mandatory. Everything else the aggregator sends
/// (answers, suggestions, unresponsive_engines, ...) is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub number_of_results: u64,
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub infoboxes: Vec<Infobox>,
}

impl SearchResponse {
    pub fn from_json(body: &str) -> crate::Result<SearchResponse> {
        Ok(serde_json::from_str(body)?)
    }
}

impl SearchResult {
    pub fn new(url: String, title: String, content: String) -> SearchResult {
        SearchResult {
            url,
            title,
            content,
        }
    }
}

impl Infobox {
    pub fn new(infobox: String, id: String, content: String, urls: Vec<InfoboxUrl>) -> Infobox {
        Infobox {
            infobox,
            id,
            content,
            urls,
        }
    }
}
