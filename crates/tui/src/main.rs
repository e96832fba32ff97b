//! Omarchy Manual - interactive terminal manual for the Omarchy desktop.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Simulator semantics (see `crates/engine`).
//! - Theme registry and setting validation (see `crates/config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::ops::ControlFlow;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use omarchy_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS, LOG_FILE_NAME};
use omarchy_manual::action::Action;
use omarchy_manual::cli::Cli;
use omarchy_manual::runtime::{
    config::{build_app, resolve_config},
    dispatch::dispatch_action,
    hints::{send_unless_cancelled, spawn_hint_expiry},
    terminal::{TerminalGuard, enable_keyboard_enhancement},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{channel, error::TrySendError};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    // Resolve before touching the terminal so errors print normally.
    let config = resolve_config(&cli)?;
    let mut app = build_app(&cli, config);

    let task_tracker = TaskTracker::new();
    let cancel = CancellationToken::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let keyboard_enhanced = enable_keyboard_enhancement();
    let _terminal_guard = TerminalGuard::new(no_mouse, keyboard_enhanced);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task with backpressure handling
    let tx_input = tx.clone();
    let input_cancel = cancel.clone();
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let event = tokio::select! {
                _ = input_cancel.cancelled() => break,
                next = reader.next() => match next {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Failed to read terminal event");
                        continue;
                    }
                    None => break,
                },
            };

            // Key and resize events carry user intent and wait for space;
            // mouse events are dropped when the channel is full.
            let sent = match event {
                Event::Key(key) => {
                    send_unless_cancelled(&tx_input, &input_cancel, Action::Input(key)).await
                }
                Event::Resize(width, height) => {
                    send_unless_cancelled(&tx_input, &input_cancel, Action::Resize(width, height))
                        .await
                }
                Event::Mouse(mouse) => match tx_input.try_send(Action::Mouse(mouse)) {
                    Ok(()) => true,
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                        true
                    }
                    Err(TrySendError::Closed(_)) => false,
                },
                _ => true,
            };
            if !sent {
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(received) = rx.recv() => {
                match dispatch_action(&mut app, received) {
                    ControlFlow::Break(()) => break,
                    ControlFlow::Continue(Some((id, ttl))) => {
                        spawn_hint_expiry(&task_tracker, cancel.clone(), tx.clone(), id, ttl);
                    }
                    ControlFlow::Continue(None) => {}
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: stop timers and input, then wait for tasks
    cancel.cancel();
    drop(rx);
    task_tracker.close();
    task_tracker.wait().await;

    // Restore terminal
    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    Ok(())
}
