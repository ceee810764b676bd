use log::debug;

use crate::{
    domain::song::Song,
    http::error::RequestFailed,
    query::{MoodRequest, SearchRequest, endpoint},
};

/// Client for the song lookup API.
///
/// Holds the session identifier for the lifetime of the process; every
/// request carries it. Built once at startup.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session_id: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// `base_url` is the service root without the `/api` suffix.
    pub fn new(base_url: &str, session_id: &str) -> anyhow::Result<Self> {
        // Requests have no deadline; the blocking client's default 30s
        // timeout is switched off.
        let http = reqwest::blocking::Client::builder().timeout(None).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: session_id.to_string(),
            http,
        })
    }

    pub fn fetch_mood(
        &self,
        request: &MoodRequest,
        limit: Option<u32>,
    ) -> Result<Vec<Song>, RequestFailed> {
        let url = endpoint::mood_url(&self.base_url, request, &self.session_id, limit);
        self.execute(&url)
    }

    pub fn search(
        &self,
        request: &SearchRequest,
        limit: Option<u32>,
    ) -> Result<Vec<Song>, RequestFailed> {
        let url = endpoint::search_url(&self.base_url, request, &self.session_id, limit);
        self.execute(&url)
    }

    /// Plain GET, body parsed as a JSON array of songs.
    ///
    /// The status code is not inspected: a non-2xx response whose body
    /// still parses as a song array counts as success.
    fn execute(&self, url: &str) -> Result<Vec<Song>, RequestFailed> {
        debug!("GET {url}");

        let body = self.http.get(url).send()?.text()?;
        let songs = serde_json::from_str(&body)?;
        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{derive_mood_request, derive_search_request};

    use rouille::{Request, Response, Server};
    use std::sync::{Arc, Mutex, mpsc};
    use std::thread::JoinHandle;

    /// One-handler HTTP server on a random local port, plus a log of the
    /// raw URLs it served.
    struct TestServer {
        base_url: String,
        seen: Arc<Mutex<Vec<String>>>,
        stop: mpsc::Sender<()>,
        handle: JoinHandle<()>,
    }

    impl TestServer {
        fn serve<F>(respond: F) -> Self
        where
            F: Fn(&Request) -> Response + Send + Sync + 'static,
        {
            let seen: Arc<Mutex<Vec<String>>> = Arc::default();
            let log = Arc::clone(&seen);

            let server = Server::new("127.0.0.1:0", move |request| {
                log.lock().unwrap().push(request.raw_url().to_string());
                respond(request)
            })
            .unwrap();

            let base_url = format!("http://{}", server.server_addr());
            let (handle, stop) = server.stoppable();

            Self {
                base_url,
                seen,
                stop,
                handle,
            }
        }

        fn client(&self) -> ApiClient {
            ApiClient::new(&self.base_url, "abc123").unwrap()
        }

        fn seen_urls(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }

        fn shutdown(self) {
            self.stop.send(()).unwrap();
            self.handle.join().unwrap();
        }
    }

    fn two_songs() -> Vec<Song> {
        vec![
            Song {
                track_name: "Midnight City".to_string(),
                artists: "M83".to_string(),
                track_genre: "synth-pop".to_string(),
                mood: "energetic".to_string(),
            },
            Song {
                track_name: "Holocene".to_string(),
                artists: "Bon Iver".to_string(),
                track_genre: "indie-folk".to_string(),
                mood: "sad".to_string(),
            },
        ]
    }

    #[test]
    fn fetch_mood_parses_songs_in_response_order() {
        let server = TestServer::serve(|_| Response::json(&two_songs()));
        let client = server.client();

        let songs = client.fetch_mood(&derive_mood_request("energetic"), None).unwrap();

        assert_eq!(songs, two_songs());
        assert_eq!(
            server.seen_urls(),
            vec!["/api/mood/energetic?session_id=abc123".to_string()]
        );

        server.shutdown();
    }

    #[test]
    fn search_sends_type_and_session() {
        let server = TestServer::serve(|_| Response::json(&Vec::<Song>::new()));
        let client = server.client();

        let songs = client
            .search(&derive_search_request("artist: daft punk"), None)
            .unwrap();

        assert!(songs.is_empty());
        assert_eq!(
            server.seen_urls(),
            vec!["/api/search?q=daft%20punk&type=artist&session_id=abc123".to_string()]
        );

        server.shutdown();
    }

    #[test]
    fn non_2xx_with_json_array_body_is_success() {
        // The status code is never looked at.
        let server =
            TestServer::serve(|_| Response::json(&two_songs()).with_status_code(500));
        let client = server.client();

        let songs = client.fetch_mood(&derive_mood_request("sad"), None).unwrap();

        assert_eq!(songs.len(), 2);
        server.shutdown();
    }

    #[test]
    fn non_json_body_is_request_failed() {
        let server = TestServer::serve(|_| Response::html("<h1>Service down</h1>"));
        let client = server.client();

        let result = client.fetch_mood(&derive_mood_request("happy"), None);

        assert!(result.is_err());
        server.shutdown();
    }

    #[test]
    fn json_object_body_is_request_failed() {
        // The backend answers errors with {"error": ...}; anything that is
        // not an array collapses into the one failure kind.
        let server = TestServer::serve(|_| {
            Response::from_data("application/json", r#"{"error": "Query parameter 'q' is required"}"#)
        });
        let client = server.client();

        let result = client.search(&derive_search_request("x"), None);

        assert!(result.is_err());
        server.shutdown();
    }

    #[test]
    fn connection_refused_is_request_failed() {
        // Port 1 is never listening on loopback.
        let client = ApiClient::new("http://127.0.0.1:1", "abc123").unwrap();

        let result = client.fetch_mood(&derive_mood_request("happy"), None);

        assert!(result.is_err());
    }

    #[test]
    fn limit_is_forwarded() {
        let server = TestServer::serve(|_| Response::json(&Vec::<Song>::new()));
        let client = server.client();

        client
            .fetch_mood(&derive_mood_request("relaxed"), Some(3))
            .unwrap();

        assert_eq!(
            server.seen_urls(),
            vec!["/api/mood/relaxed?session_id=abc123&limit=3".to_string()]
        );

        server.shutdown();
    }
}
