//! rmt-tui - Terminal User Interface for Redmine
//!
//! A Ratatui-based TUI for searching Redmine issues, reading them and
//! logging time against them.

mod app;
mod config;
mod runtime;
mod state;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use runtime::{AppEvent, TaskRunner};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracker::{IssueTracker, RedmineClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::Theme;

/// How long to wait for terminal input per loop iteration
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner animation period
const TICK_INTERVAL: Duration = Duration::from_millis(120);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load()?;
    config.validate()?;

    let tracker = RedmineClient::new(
        &config.redmine.url,
        &config.redmine.token,
        config.redmine.activity_prefixes.clone(),
    )
    .context("failed to create Redmine client")?;

    let favorites = state::favorites(&config.favorites, config.redmine.follow_up_field_id);
    let startup_query = std::env::args().nth(1);
    let mut app = App::new(Theme::default(), favorites, startup_query);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Connected to {}", config.redmine.url);
    let result = run_app(&mut terminal, &mut app, Arc::new(tracker)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory; the terminal belongs to the UI
fn init_logging() {
    let file = ProjectDirs::from("io", "rmt", "rmt-tui").and_then(|dirs| {
        let dir = dirs.data_dir();
        fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("rmt-tui.log"))
            .ok()
    });

    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rmt_tui=info".into()),
        )
        .with(file_layer)
        .init();
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tracker: Arc<dyn IssueTracker>,
) -> Result<()> {
    let (tx, mut rx) = runtime::channel();
    let runner = TaskRunner::new(tracker, tx);

    let size = terminal.size()?;
    app.handle_event(AppEvent::Resize(size.width, size.height));
    runner.spawn_all(app.init());

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            let tasks = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_event(AppEvent::Key(key))
                }
                Event::Resize(width, height) => app.handle_event(AppEvent::Resize(width, height)),
                _ => Vec::new(),
            };
            runner.spawn_all(tasks);
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.handle_event(AppEvent::Tick);
            last_tick = Instant::now();
        }

        // Task completions
        while let Ok(event) = rx.try_recv() {
            runner.spawn_all(app.handle_event(event));
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
