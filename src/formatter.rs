use crate::data_models::SearchResponse;

pub const DEFAULT_RESULT_LIMIT: i64 = 3;

pub const NO_RESULTS: &str = "No results found\n";

/// Renders a search response as the plain-text digest handed back to the caller.
///
/// Infoboxes come first, all of them, in the order the aggregator sent them.
/// Organic results follow, capped at `limit`; a non-positive `limit` emits none.
pub fn format_digest(response: &SearchResponse, limit: i64) -> String {
    let mut text = String::new();

    for infobox in &response.infoboxes {
        text.push_str(&format!(
            "Infobox: {}\nID: {}\nContent: {}\n\n",
            infobox.infobox, infobox.id, infobox.content
        ));
    }

    if response.results.is_empty() {
        text.push_str(NO_RESULTS);
        return text;
    }

    for result in response.results.iter().take(result_cap(limit)) {
        text.push_str(&format!(
            "Title: {}\nURL: {}\nContent: {}\n\n",
            result.title, result.url, result.content
        ));
    }

    text
}

fn result_cap(limit: i64) -> usize {
    if limit <= 0 {
        return 0;
    }
    usize::try_from(limit).unwrap_or(usize::MAX)
}

#[test]
fn test_result_cap() {
    assert_eq!(result_cap(-4), 0);
    assert_eq!(result_cap(0), 0);
    assert_eq!(result_cap(3), 3);
    assert!(result_cap(i64::MAX) > 0);
}
