//! The three-region results view: loading indicator, empty-state
//! indicator, and the song card grid.

use log::warn;

use crate::{domain::song::Song, http::error::RequestFailed};

/// Token tying a completion to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// What the results area is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Before the first request.
    Idle,
    Loading,
    /// No songs, whether from an empty result or a failed request; the
    /// two are indistinguishable here.
    Empty,
    Populated(Vec<Song>),
}

/// Owner of the view state. All transitions go through here: any state
/// goes to `Loading` when a request is issued, `Loading` goes to `Empty`
/// on empty success or failure, and to `Populated` on non-empty success.
#[derive(Debug)]
pub struct Screen {
    state: ViewState,
    current: u64,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            current: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Marks a new request in flight and clears prior results. Returns
    /// the generation token the eventual completion must carry.
    pub fn request_started(&mut self) -> Generation {
        self.current += 1;
        self.state = ViewState::Loading;
        Generation(self.current)
    }

    /// Applies a completion, returning whether it was applied. A
    /// completion from a superseded request is dropped without touching
    /// the view; the worker that produced it was never cancelled, its
    /// result just no longer matters.
    pub fn apply(
        &mut self,
        generation: Generation,
        result: Result<Vec<Song>, RequestFailed>,
    ) -> bool {
        if generation.0 != self.current {
            warn!("dropping stale response for request #{}", generation.0);
            return false;
        }

        self.state = match result {
            Ok(songs) if songs.is_empty() => ViewState::Empty,
            Ok(songs) => ViewState::Populated(songs),
            Err(err) => {
                warn!("{err}");
                ViewState::Empty
            }
        };

        true
    }

    /// Current view as terminal text.
    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Idle => String::new(),
            ViewState::Loading => "Loading songs...\n".to_string(),
            ViewState::Empty => "No songs found. Try a different search or mood.\n".to_string(),
            ViewState::Populated(songs) => {
                let mut out = String::new();
                for song in songs {
                    out.push_str(&render_card(song));
                    out.push('\n');
                }
                out
            }
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// One card: name on top, then the three labeled fields. Field contents
/// are rendered verbatim.
fn render_card(song: &Song) -> String {
    format!(
        "{}\n  Artist: {}\n  Genre: {}\n  Mood: {}\n",
        song.track_name, song.artists, song.track_genre, song.mood
    )
}
