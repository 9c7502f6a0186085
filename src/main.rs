mod app;
mod config;
mod input;
mod logging;
mod model;
mod resource;
mod router;
mod share;
#[cfg(test)]
mod test_helpers;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::resource::paginator::check_page_size;
use crate::router::Route;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "interndash",
    version,
    about = "Terminal admin dashboard for internship management"
)]
struct Cli {
    /// Config file. Defaults to <config dir>/interndash/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to open at startup, e.g. /users.
    #[arg(long)]
    route: Option<String>,

    /// Table rows per page (5, 10 or 25).
    #[arg(long, value_parser = parse_page_size)]
    page_size: Option<usize>,

    /// Write the default config to the config path and exit.
    #[arg(long, default_value_t = false)]
    write_default_config: bool,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("not a number: {}", s))?;
    check_page_size(size).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_path);

    if cli.write_default_config {
        config::save_config(&config_path, &config::AppConfig::default())?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let mut cfg = config::load_config(&config_path)?;
    if let Some(size) = cli.page_size {
        cfg.ui.page_size = size;
    }
    let start_path = cli.route.as_deref().unwrap_or(&cfg.ui.start_route);
    let start = router::resolve(start_path)
        .with_context(|| format!("Invalid start route {}", start_path))?
        .route;

    let log_file = logging::init(&cfg.logging);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        log_file = ?log_file,
        "interndash starting"
    );

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, start).await;

    restore_terminal()?;
    tracing::info!("interndash stopped");

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    start: Route,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(1));

    let mut state = AppState::new(cfg, start);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn clock tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Quit => state.should_quit = true,
                Action::Submitted { route, submission } => {
                    tracing::info!(
                        route = %route,
                        title = %submission.title,
                        mode = ?submission.mode,
                        "submission"
                    );
                    tracing::debug!(values = ?submission.values, "submission draft");
                }
                Action::GenerateShareLink => {
                    let link = share::generate_link();
                    tracing::info!(link = %link, "share link generated");
                    state.set_status(format!("Share link: {}", link));
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
