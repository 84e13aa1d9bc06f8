use nasa_frontend::backend::{BackendClient, GalleryBackend};
use nasa_frontend::command::{Command, HELP_TEXT};
use nasa_frontend::config;
use nasa_frontend::logging;
use nasa_frontend::session::{Completion, PendingRequest, ViewSession};

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn dispatch(pending: PendingRequest, backend: Arc<dyn GalleryBackend>, tx: mpsc::Sender<Completion>) {
    tokio::spawn(async move {
        let completion = pending.run(backend.as_ref()).await;
        if tx.send(completion).await.is_err() {
            tracing::debug!("Session closed before response arrived");
        }
    });
}

fn show_weather(backend: Arc<dyn GalleryBackend>) {
    tokio::spawn(async move {
        match backend.mars_weather().await {
            Ok(weather) => match serde_json::to_string_pretty(&weather) {
                Ok(text) => println!("{}", text),
                Err(e) => tracing::error!("Failed to format weather: {}", e),
            },
            Err(e) => {
                tracing::error!("Error fetching Mars weather: {:#}", e);
                println!("Mars weather is unavailable right now.");
            }
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = config::read_config(&config_path)?;
    let _logging_guard = logging::init_logging(&config.log_dir, "nasa-frontend", &config.log_level)?;

    tracing::info!("NASA frontend started, backend at {}", config.backend_url);

    let backend: Arc<dyn GalleryBackend> =
        Arc::new(BackendClient::new(&config.backend_url, config.request_timeout())?);
    let mut session = ViewSession::new();
    let (tx, mut rx) = mpsc::channel::<Completion>(16);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("NASA API 🚀✨  (backend: {})", config.backend_url);
    println!("{}", HELP_TEXT);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let Some(command) = Command::parse(&line) else {
                    continue;
                };

                match command {
                    Command::Toggle(panel) => {
                        match session.toggle(panel) {
                            Some(pending) => {
                                println!("Loading {}...", panel);
                                dispatch(pending, backend.clone(), tx.clone());
                            }
                            None => print!("{}", session),
                        }
                    }
                    Command::Search(query) => {
                        println!("Searching for '{}'...", query);
                        dispatch(session.search(&query), backend.clone(), tx.clone());
                    }
                    Command::Weather => show_weather(backend.clone()),
                    Command::Help => println!("{}", HELP_TEXT),
                    Command::Quit => break,
                    Command::Unknown(text) => println!("Unknown command: {} (type 'help')", text),
                }
            }
            Some(completion) = rx.recv() => {
                if session.apply(completion) {
                    print!("{}", session);
                }
            }
        }
    }

    tracing::info!("NASA frontend exiting.");
    Ok(())
}
