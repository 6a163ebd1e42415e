//! Remote notes document fetching.

use serde_json::Value;

/// Fetch the remote notes document with a no-cache read.
///
/// Every failure mode (connection error, non-2xx status, invalid JSON)
/// degrades to `None` with a warning; the caller proceeds with empty notes
/// for its preferred year. No error ever reaches the user from this path.
pub async fn fetch_notes_document(url: &str) -> Option<Value> {
    let client = reqwest::Client::new();

    let response = match client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Could not fetch notes document from {}: {}", url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        log::warn!(
            "Notes document fetch returned HTTP {} for {}",
            response.status(),
            url
        );
        return None;
    }

    match response.json().await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Notes document at {} is not valid JSON: {}", url, e);
            None
        }
    }
}
