//! photofeed — an endlessly scrolling NASA photo feed for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  FetchKind  ┌──────────┐  draw()  ┌──────────┐
//! │  app.rs  │ ──────────► │  poll.rs │          │  ui.rs   │
//! │ (state)  │ ◄────────── │  (task)  │          │ (render) │
//! └──────────┘   PollMsg   └──────────┘          └──────────┘
//!      ▲                        │                      ▲
//!      │ handle_key_event()     │ fetch_batch()        │
//! ┌──────────┐            ┌──────────┐                 │
//! │ input.rs │            │ source/  │          app ───┘
//! └──────────┘            └──────────┘
//! ```
//!
//! * **`source/`** — the NASA search schema, display records, the term
//!   rotation, and the fetcher behind a swappable [`source::Transport`].
//! * **`poll`** — a tokio task that owns the fetcher and runs one fetch at a
//!   time.
//! * **`feed`** — the growing record list and its in-flight guard.
//! * **`app`** — owns all UI state and applies finished fetches.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`config`** / **`logging`** — settings and the file log.
//! * **`main`** — wires everything together: load config, start the worker,
//!   set up the terminal, and run the event loop.

mod app;
mod config;
mod feed;
mod input;
mod logging;
mod poll;
mod source;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::source::{PhotoFeedFetcher, ReqwestTransport, SearchTermRotator};

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the default hook prints a panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- configuration and logging -------------------------------------------
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    info!(
        base_url = %config.api.base_url,
        terms = config.api.search_terms.len(),
        "starting photofeed"
    );

    // -- fetch worker ----------------------------------------------------------
    // The UI loop stays synchronous; the runtime only hosts the worker.
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _runtime_guard = runtime.enter();

    let transport = ReqwestTransport::new().context("failed to build HTTP client")?;
    let rotator = SearchTermRotator::new(config.api.search_terms.clone())?;
    let fetcher = PhotoFeedFetcher::new(&config.api.base_url, rotator, Box::new(transport));
    let (handle, mut rx) = poll::spawn(fetcher);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(handle);
    app.fetch_next_batch(false);

    // -- main event loop -------------------------------------------------------
    // Each iteration:
    //   1. Apply any finished fetches.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = config.ui.tick_rate();

    loop {
        // 1. Completions are applied here, on the UI side only.
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    info!(photos = app.records().len(), "exiting");
    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
