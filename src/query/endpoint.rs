//! Builds the request URLs the lookup API expects.

use crate::query::{MoodRequest, SearchRequest};

/// URL for browsing a mood: `{base}/api/mood/{label}?session_id={id}`.
///
/// The label goes into a path segment, so it is percent-encoded here even
/// though the backend also accepts it raw.
pub fn mood_url(
    base_url: &str,
    request: &MoodRequest,
    session_id: &str,
    limit: Option<u32>,
) -> String {
    let base = base_url.trim_end_matches('/');
    let mood = urlencoding::encode(&request.mood);

    let mut url = format!("{base}/api/mood/{mood}?session_id={session_id}");
    push_limit(&mut url, limit);
    url
}

/// URL for a search: `{base}/api/search?q=...[&type=...]&session_id={id}`.
///
/// Parameter order is fixed: `q`, then `type` when the search is narrowed,
/// then `session_id`, then `limit` when one was requested.
pub fn search_url(
    base_url: &str,
    request: &SearchRequest,
    session_id: &str,
    limit: Option<u32>,
) -> String {
    let base = base_url.trim_end_matches('/');
    let q = urlencoding::encode(&request.query);

    let mut url = format!("{base}/api/search?q={q}");
    if let Some(kind) = request.kind {
        url.push_str("&type=");
        url.push_str(kind.as_param());
    }
    url.push_str("&session_id=");
    url.push_str(session_id);
    push_limit(&mut url, limit);
    url
}

fn push_limit(url: &mut String, limit: Option<u32>) {
    if let Some(limit) = limit {
        url.push_str("&limit=");
        url.push_str(&limit.to_string());
    }
}
