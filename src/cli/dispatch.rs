//! Runs API requests off the prompt thread.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::domain::song::Song;
use crate::http::client::ApiClient;
use crate::http::error::RequestFailed;
use crate::query::{MoodRequest, SearchRequest};
use crate::view::{Generation, Screen, ViewState};

pub enum Request {
    Mood(MoodRequest),
    Search(SearchRequest),
}

/// What a worker sends back when its request finishes.
struct Completion {
    generation: Generation,
    result: Result<Vec<Song>, RequestFailed>,
}

/// Hands requests to worker threads and feeds their completions back into
/// a [`Screen`]. Requests are never cancelled: superseding one just means
/// its completion will be dropped by the screen when it arrives.
pub struct Dispatcher {
    client: ApiClient,
    limit: Option<u32>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Dispatcher {
    pub fn new(client: ApiClient, limit: Option<u32>) -> Self {
        let (tx, rx) = channel();
        Self {
            client,
            limit,
            tx,
            rx,
        }
    }

    /// Puts the screen into loading and starts the request on a worker
    /// thread.
    pub fn dispatch(&self, screen: &mut Screen, request: Request) {
        let generation = screen.request_started();
        let client = self.client.clone();
        let limit = self.limit;
        let tx = self.tx.clone();

        thread::spawn(move || {
            let result = match request {
                Request::Mood(mood) => client.fetch_mood(&mood, limit),
                Request::Search(search) => client.search(&search, limit),
            };
            // Send fails only when the prompt already exited.
            let _ = tx.send(Completion { generation, result });
        });
    }

    /// Blocks until the newest request's completion has been applied.
    /// Completions of superseded requests may arrive first; the screen
    /// drops them and the wait continues.
    pub fn wait(&self, screen: &mut Screen) {
        while *screen.state() == ViewState::Loading {
            match self.rx.recv() {
                Ok(completion) => {
                    screen.apply(completion.generation, completion.result);
                }
                Err(_) => break,
            }
        }
    }
}
