//! AnimeDesk console - runs actions read from stdin, one per line
//!
//! Architecture:
//! - Reader thread - blocking stdin, queues prompt answers and forwards actions
//! - Router actor - owns the router and runs the actions in order

use std::io::BufRead;

use tokio::sync::mpsc;

use animedesk::constants::{APP_TITLE, APP_VERSION, LOG_FILE};
use animedesk::headless::PromptAnswers;
use animedesk::{headless, AppState, Router, RouterActor, Storage};

/// Lines starting with this answer a prompt instead of running an action
const ANSWER_PREFIX: &str = "> ";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let storage = Storage::new();
    std::fs::create_dir_all(storage.config_dir())?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(storage.config_dir(), LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let assume_yes = std::env::args().skip(1).any(|arg| arg == "--yes");
    tracing::info!(version = APP_VERSION, assume_yes, "Starting");
    println!("{} {} - one action per line, Exit to quit", APP_TITLE, APP_VERSION);
    println!("Lines starting with '{}' answer the next input or folder prompt.", ANSWER_PREFIX);

    let answers = PromptAnswers::default();
    let state = AppState::load(storage.clone());
    let services = headless::services(storage, assume_yes, answers.clone());
    let router = Router::new(state, services);

    // Stdin blocks, so it gets a plain thread that never holds up shutdown
    let (action_tx, action_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(answer) = line.strip_prefix(ANSWER_PREFIX) {
                answers.push(answer);
                continue;
            }
            if action_tx.send(line).is_err() {
                break;
            }
        }
    });

    RouterActor::new(router).run(action_rx).await;
    Ok(())
}
