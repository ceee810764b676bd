//! Interactive prompt: free-text searches and mood browsing.

use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::cli::dispatch::{Dispatcher, Request};
use crate::domain::song::KNOWN_MOODS;
use crate::query::{derive_mood_request, derive_search_request};
use crate::view::Screen;

/// One line of prompt input, classified.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Moods,
    Mood(&'a str),
    Search(&'a str),
}

/// `input` is already trimmed and non-empty. Anything that is not a
/// recognised command is a search.
fn parse_command(input: &str) -> Command<'_> {
    match input {
        "quit" | "exit" => return Command::Quit,
        "moods" => return Command::Moods,
        _ => {}
    }

    if let Some(label) = input.strip_prefix("mood ") {
        let label = label.trim();
        if !label.is_empty() {
            return Command::Mood(label);
        }
    }

    Command::Search(input)
}

pub fn run(dispatcher: Dispatcher) -> anyhow::Result<()> {
    println!("moodgrid: songs by mood");
    println!("Type a search (free text, or narrow it with 'artist:' / 'genre:'),");
    println!("or 'mood <label>' to browse a mood. 'moods' re-lists labels; 'quit' leaves.");
    println!("Known moods: {}", KNOWN_MOODS.join(", "));

    let mut rl = DefaultEditor::new().context("Failed to initialize the prompt")?;
    let mut screen = Screen::new();

    loop {
        match rl.readline("moodgrid> ") {
            Ok(line) => {
                let input = line.trim();

                // Skip empty lines
                if input.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(input);

                match parse_command(input) {
                    Command::Quit => break,
                    Command::Moods => println!("Known moods: {}", KNOWN_MOODS.join(", ")),
                    Command::Mood(label) => run_request(
                        &dispatcher,
                        &mut screen,
                        Request::Mood(derive_mood_request(label)),
                    ),
                    Command::Search(text) => run_request(
                        &dispatcher,
                        &mut screen,
                        Request::Search(derive_search_request(text)),
                    ),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type 'quit' to exit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Prompt error"),
        }
    }

    Ok(())
}

fn run_request(dispatcher: &Dispatcher, screen: &mut Screen, request: Request) {
    dispatcher.dispatch(screen, request);
    print!("{}", screen.render());

    dispatcher.wait(screen);
    print!("{}", screen.render());
}
