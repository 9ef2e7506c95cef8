//! Main TUI runner - entry point and event loop
//!
//! - `run`: builds the HTTP backend from settings and starts a session
//! - `run_with_backend`: terminal lifecycle around any [`Backend`]
//! - `run_loop`: drains completions, draws, polls input

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc;

use termaid_app::actions::spawn_health_polling;
use termaid_app::config::Settings;
use termaid_app::process::process_message;
use termaid_app::signals::spawn_signal_handler;
use termaid_app::{AppState, Message};
use termaid_client::{Backend, HttpBackend};
use termaid_core::prelude::*;

use crate::{event, render};

/// Install a panic hook that restores the terminal
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run a session against the backend named in `settings`
pub async fn run(settings: Settings, start_dir: String) -> Result<()> {
    let timeout = Duration::from_secs(settings.server.request_timeout_secs.max(1));
    let backend = HttpBackend::new(&settings.server.base_url, timeout)?;
    run_with_backend(settings, start_dir, Arc::new(backend)).await
}

/// Run a session against any backend
pub async fn run_with_backend<B>(settings: Settings, start_dir: String, backend: Arc<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    install_panic_hook();

    let poll_secs = settings.server.health_poll_secs;
    info!("Starting session in {}", start_dir);
    let mut state = AppState::new(settings, start_dir);

    // Completions from backend tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::CheckHealth, &msg_tx, &backend);
    let poller = (poll_secs > 0).then(|| {
        spawn_health_polling(
            Arc::clone(&backend),
            msg_tx.clone(),
            Duration::from_secs(poll_secs),
        )
    });

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &backend);

    if let Some(handle) = poller {
        handle.abort();
    }

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Session ended with error: {}", e);
    } else {
        info!("Session ended");
    }
    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    while !state.should_quit() {
        // Apply completions in arrival order
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, backend);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            process_message(state, message, msg_tx, backend);
        }
    }

    Ok(())
}
