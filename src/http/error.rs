use thiserror::Error;

/// The only way a song request fails.
///
/// Transport errors, non-JSON bodies and JSON of the wrong shape all
/// collapse into this one kind; callers render every one of them the same
/// way as an empty result.
#[derive(Debug, Error)]
#[error("song request failed: {0:#}")]
pub struct RequestFailed(pub anyhow::Error);

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        Self(err.into())
    }
}

impl From<serde_json::Error> for RequestFailed {
    fn from(err: serde_json::Error) -> Self {
        Self(err.into())
    }
}
