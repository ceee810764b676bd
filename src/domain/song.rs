use serde::{Deserialize, Serialize};

/// A song as returned by the lookup API.
///
/// Only the fields the client displays are kept; the backend sends more
/// (`track_id`, `album_name`, `popularity`) and those are ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub track_name: String,
    pub artists: String,
    pub track_genre: String,
    pub mood: String,
}

/// Mood labels the backend actually scores. Shown as hints only; any label
/// the user types is sent as-is.
pub const KNOWN_MOODS: &[&str] = &["happy", "sad", "energetic", "relaxed"];
