use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use crate::config::Config;
use crate::http::client::ApiClient;
use crate::query::{derive_mood_request, derive_search_request};
use crate::storage::session::SessionStore;
use crate::view::Screen;

mod browse;
mod dispatch;

use dispatch::{Dispatcher, Request};

#[derive(Parser)]
#[command(name = "moodgrid")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the mood-based song lookup service")]
pub struct Cli {
    /// Path to the config TOML file (default: the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch songs for a mood label
    Mood {
        /// Mood label, sent to the service as given (known: happy, sad, energetic, relaxed)
        label: String,
        /// Cap the number of songs returned
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Search songs; 'artist:' or 'genre:' anywhere in the text narrows the search
    Search {
        /// Search text
        text: String,
        /// Cap the number of songs returned
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Interactive prompt for searches and mood browsing
    Browse {
        /// Cap the number of songs returned per request
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show the persistent session identifier
    Session,
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
    .expect("Failed to load config");

    let session_path = cfg.session_path().expect("Failed to resolve session path");
    let session = SessionStore::new(&session_path)
        .load_or_create()
        .expect("Failed to load session");

    let client = ApiClient::new(&cfg.api.base_url, &session.id)
        .expect("Failed to initialize HTTP client");

    match &cli.command {
        Commands::Mood { label, limit } => {
            one_shot(client, *limit, Request::Mood(derive_mood_request(label)));
        }

        Commands::Search { text, limit } => {
            // Blank input never issues a request.
            let text = text.trim();
            if text.is_empty() {
                debug!("blank search input, nothing to send");
                return;
            }
            one_shot(client, *limit, Request::Search(derive_search_request(text)));
        }

        Commands::Browse { limit } => {
            browse::run(Dispatcher::new(client, *limit)).expect("Prompt failed");
        }

        Commands::Session => {
            println!("session_id: {}", session.id);
            println!("created_at: {}", session.created_at);
            println!("stored_at: {}", session_path.display());
        }
    }
}

fn one_shot(client: ApiClient, limit: Option<u32>, request: Request) {
    let dispatcher = Dispatcher::new(client, limit);
    let mut screen = Screen::new();

    dispatcher.dispatch(&mut screen, request);
    dispatcher.wait(&mut screen);

    print!("{}", screen.render());
}
