//! Contact TUI - a terminal contact form
//!
//! A Ratatui-based form that validates contact details as you type
//! and sends them through a simulated submission service.

mod app;
mod config;
mod input;
mod orchestrator;
mod state;
mod submission;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::ContactConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll interval; also drives banner expiry
const TICK_RATE: Duration = Duration::from_millis(50);
/// Faster polling while the form is scrolling (~60fps)
const ANIMATION_TICK_RATE: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = ContactConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // The terminal belongs to the UI, so logs go to a file
    init_logging(config.log_path().as_deref());
    if let Err(err) = &loaded {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let result = match App::new(&config) {
        Ok(mut app) => run_app(&mut terminal, &mut app).await,
        Err(err) => Err(err),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting with error: {err:#}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(path: Option<&Path>) {
    let writer = path
        .and_then(|path| {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok()?;
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        })
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::sink));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Record how much of the form is on screen for scroll-to-field
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.set_viewport_height(ui::form_viewport_height(
            area,
            app.state.is_success_visible(),
        ));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.state.scroll.is_animating() {
            ANIMATION_TICK_RATE
        } else {
            TICK_RATE
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Viewport is recalculated on next draw
                }
                _ => {}
            }
        }

        app.tick();
        app.poll_submission().await;

        // Check if app wants to quit
        if app.should_quit() {
            break;
        }
    }

    // Let an in-flight submission settle so its outcome is logged
    app.finish_pending_submission().await;
    Ok(())
}
