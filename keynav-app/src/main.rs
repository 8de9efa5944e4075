//! keynav - modal key dispatch in a terminal
//!
//! Feeds terminal key events through the dispatcher and echoes what the host
//! would receive. Ctrl-q quits.

mod config;
mod host;
mod logging;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};

use keynav_input::{Dispatcher, Ipc};

use config::Config;
use host::EchoHost;

/// Poll interval when no chord is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    logging::init(&config)?;
    tracing::info!(?config, pid = std::process::id(), "starting keynav");

    // Create the host channel
    let (ipc_tx, ipc_rx) = crossbeam_channel::unbounded::<String>();
    let dispatcher = Dispatcher::new(ipc_tx).with_chord_timeout(config.chord_timeout);
    let host = EchoHost::new(ipc_rx, stdout());

    enable_raw_mode()?;
    execute!(
        stdout(),
        Print("keynav - h/j/k/l, gg, G, C-d, C-u, i, :, Esc | Ctrl-q quits\r\n")
    )?;

    let result = run_app(dispatcher, host);

    // Cleanup
    disable_raw_mode()?;
    execute!(stdout(), Print("\r\n"))?;

    match &result {
        Ok(()) => tracing::info!("keynav stopped"),
        Err(err) => tracing::error!(error = %err, "keynav failed"),
    }
    result
}

fn run_app<I: Ipc>(
    mut dispatcher: Dispatcher<I>,
    mut host: EchoHost<io::Stdout>,
) -> anyhow::Result<()> {
    host.drain(&dispatcher.status_line())?;

    loop {
        // Wake up in time to drop a stale chord
        let timeout = dispatcher.time_until_decay().unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle quit shortcut
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }

                let disposition = dispatcher.handle_key(key)?;
                tracing::trace!(?key, handled = disposition.is_handled(), "key dispatched");
            }
        } else if dispatcher.tick() {
            tracing::debug!("pending chord expired");
        }

        host.drain(&dispatcher.status_line())?;
    }

    tracing::info!(messages = host.received(), "session summary");
    Ok(())
}
