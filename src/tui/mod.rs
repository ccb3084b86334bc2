//! Interactive terminal UI: one screen wiring the form to the download.

mod app;
mod draw;
mod event;
mod input;
mod task;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::fetch::VideoFetcher;

use self::app::App;
use self::draw::draw;
use self::event::AppEvent;
use self::input::{handle_input, handle_paste};
use self::task::handle_app_event;

/// RAII guard that ensures terminal cleanup on drop.
/// Restores terminal to normal mode even if a panic occurs.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            crossterm::event::EnableBracketedPaste
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            crossterm::event::DisableBracketedPaste,
            LeaveAlternateScreen
        );
    }
}

/// Run the interactive screen until the user quits.
///
/// # Errors
/// Returns an error if terminal setup fails, the HTTP client cannot be
/// built, or drawing encounters an I/O error.
pub async fn run(config: AppConfig) -> io::Result<()> {
    // Initialize terminal with RAII guard for automatic cleanup
    let _terminal_guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let fetcher = VideoFetcher::new(&config.endpoint).map_err(io::Error::other)?;
    let mut app = App::new(config, Arc::new(fetcher), event_tx);

    loop {
        terminal.draw(|f| draw(f, &app))?;

        // Poll for input with 100ms timeout
        if crossterm::event::poll(Duration::from_millis(100))? {
            match crossterm::event::read()? {
                Event::Key(key) => handle_input(&mut app, key),
                Event::Paste(text) => handle_paste(&mut app, &text),
                _ => {}
            }
        }

        // Drain task events (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            handle_app_event(&mut app, event);
        }

        app.expire_notices(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Show cursor before exit (terminal cleanup handled by RAII guard)
    terminal.show_cursor()?;

    Ok(())
}
