//! Turns raw user input into immutable request values.

pub mod endpoint;

const ARTIST_MARKER: &str = "artist:";
const GENRE_MARKER: &str = "genre:";

/// Which backend field a narrowed search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Artist,
    Genre,
}

impl SearchKind {
    /// Value of the `type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SearchKind::Artist => "artist",
            SearchKind::Genre => "genre",
        }
    }
}

/// A free-text search, possibly narrowed to one field by an `artist:` or
/// `genre:` marker found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub kind: Option<SearchKind>,
}

/// A mood-browse request. The label is whatever the user selected,
/// unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodRequest {
    pub mood: String,
}

/// Derives a search request from raw input. The caller guards against
/// empty input and trims it first.
///
/// Markers are recognised case-insensitively anywhere in the text, not
/// just as a prefix: "daft punk artist:" narrows to an artist search the
/// same way "artist: daft punk" does. `artist:` wins over `genre:` when
/// both occur. The first occurrence is stripped and the remainder trimmed;
/// a query left empty by stripping is still a valid request.
pub fn derive_search_request(raw: &str) -> SearchRequest {
    if let Some(query) = strip_marker(raw, ARTIST_MARKER) {
        return SearchRequest {
            query,
            kind: Some(SearchKind::Artist),
        };
    }

    if let Some(query) = strip_marker(raw, GENRE_MARKER) {
        return SearchRequest {
            query,
            kind: Some(SearchKind::Genre),
        };
    }

    SearchRequest {
        query: raw.to_string(),
        kind: None,
    }
}

pub fn derive_mood_request(label: &str) -> MoodRequest {
    MoodRequest {
        mood: label.to_string(),
    }
}

/// Removes the first case-insensitive occurrence of `marker` and trims
/// the result. None if the marker does not occur.
fn strip_marker(raw: &str, marker: &str) -> Option<String> {
    let at = find_ignore_ascii_case(raw, marker)?;

    let mut rest = String::with_capacity(raw.len() - marker.len());
    rest.push_str(&raw[..at]);
    rest.push_str(&raw[at + marker.len()..]);

    Some(rest.trim().to_string())
}

/// Byte-window search for an ASCII needle, ignoring ASCII case.
///
/// The returned offset is always a char boundary of `haystack`: the needle
/// is pure ASCII and cannot match inside a multibyte sequence. Lowercasing
/// the whole haystack instead would not be offset-safe.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if haystack.len() < needle.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
