//! Alphabetic scroll list demo
//!
//! Shows a list of names grouped by initial with an A-Z index bar. Drag or
//! click the bar (or type a letter) to jump between groups.

mod app;
mod config;
mod items;

use alphabetic_scroll_list::{ui, Alphabet};
use anyhow::Result;
use app::App;
use config::ListConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before the next tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alphabetic_scroll_list=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ListConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring config: {err:#}");
        ListConfig::default()
    });

    let items = match &config.items_file {
        Some(path) => items::load_items(path).await?,
        None => items::SAMPLE_NAMES.iter().map(|s| s.to_string()).collect(),
    };
    let mut app = App::new(items::indexable(items, &Alphabet::LATIN), &config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Scroll requests queued by the previous events land here
        app.tick();

        // Draw the UI
        let mut areas = app.areas;
        terminal.draw(|frame| areas = ui::draw(frame, &app.list, &app.view()))?;
        app.record_areas(areas);

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Viewport is re-measured on the next draw
                }
                _ => {}
            }
        }

        // Let the runtime breathe between frames
        tokio::task::yield_now().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
