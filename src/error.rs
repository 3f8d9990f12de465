use thiserror::Error;

/// Longest slice of an upstream error body kept in [`Error::HttpStatus`].
const BODY_SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum Error {
    #[error("upstream returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("unexpected response shape: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to convert html: {0}")]
    Conversion(String),

    #[error("invalid url {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn http_status(status: u16, body: &str) -> Error {
        let body = if body.chars().count() > BODY_SNIPPET_LEN {
            format!(
                "{}...",
                body.chars().take(BODY_SNIPPET_LEN).collect::<String>()
            )
        } else {
            body.to_string()
        };
        Error::HttpStatus { status, body }
    }
}

#[test]
fn test_http_status_snippet_is_capped() {
    let long = "x".repeat(500);
    match Error::http_status(502, &long) {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.len(), BODY_SNIPPET_LEN + 3);
            assert!(body.ends_with("..."));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    match Error::http_status(500, "boom") {
        Error::HttpStatus { body, .. } => assert_eq!(body, "boom"),
        other => panic!("unexpected error: {other:?}"),
    }
}
