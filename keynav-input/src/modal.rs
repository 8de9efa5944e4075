//! Modal state machine for vim-style key dispatch

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::chord::{ChordBuffer, ChordTable, CHORD_TIMEOUT};
use crate::ipc::{Ipc, IpcError};
use crate::key::{self, KeyToken};
use crate::message::Message;
use crate::timer::{Clock, SystemClock};

/// Input modes (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl Mode {
    /// Get display name for the mode
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }

    /// Message announcing a switch into this mode
    pub fn entry_message(&self) -> Message {
        match self {
            Mode::Normal => Message::EnterNormalMode,
            Mode::Insert => Message::EnterInsertMode,
            Mode::Command => Message::EnterCommandMode,
        }
    }
}

/// What the host should do with its own default handling of a key
///
/// Propagation is always stopped: the dispatcher is the only listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Consumed; suppress the host's default behavior
    Handled,
    /// Let the host handle the key natively
    Unhandled,
}

impl Disposition {
    pub fn is_handled(&self) -> bool {
        matches!(self, Disposition::Handled)
    }
}

/// Turns key events into host messages
pub struct Dispatcher<I, C = SystemClock> {
    mode: Mode,
    command_line: String,
    chord: ChordBuffer,
    chords: ChordTable,
    ipc: I,
    clock: C,
}

impl<I: Ipc> Dispatcher<I, SystemClock> {
    pub fn new(ipc: I) -> Self {
        Self::with_clock(ipc, SystemClock)
    }
}

impl<I: Ipc, C: Clock> Dispatcher<I, C> {
    pub fn with_clock(ipc: I, clock: C) -> Self {
        Self {
            mode: Mode::Normal,
            command_line: String::new(),
            chord: ChordBuffer::new(CHORD_TIMEOUT),
            chords: ChordTable::normal(),
            ipc,
            clock,
        }
    }

    /// Replace the chord decay delay
    pub fn with_chord_timeout(mut self, timeout: Duration) -> Self {
        self.chord = ChordBuffer::new(timeout);
        self
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get current command line (for display)
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Pending chord in joined form, empty when nothing is pending
    pub fn pending_chord(&self) -> String {
        self.chord.joined()
    }

    pub fn chord_timeout(&self) -> Duration {
        self.chord.timeout()
    }

    /// Time until the pending chord decays, if one is pending
    pub fn time_until_decay(&self) -> Option<Duration> {
        self.chord.time_until_decay(self.clock.now())
    }

    /// Text for a status bar: `:` + command line, or the mode name
    /// followed by any pending chord
    pub fn status_line(&self) -> String {
        match self.mode {
            Mode::Command => format!(":{}", self.command_line),
            Mode::Normal if !self.chord.is_empty() => {
                format!("{} {}", self.mode.display_name(), self.chord.joined())
            }
            mode => mode.display_name().to_string(),
        }
    }

    pub fn ipc(&self) -> &I {
        &self.ipc
    }

    /// Run the chord decay if it is due; returns true when a chord was dropped
    pub fn tick(&mut self) -> bool {
        self.chord.expire(self.clock.now())
    }

    /// Handle a key event, posting any resulting messages to the host
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Disposition, IpcError> {
        if key.kind == KeyEventKind::Release {
            return Ok(Disposition::Unhandled);
        }

        // A due decay always lands before the next key is interpreted
        self.tick();

        if key::is_cancel(&key) {
            // Escape has no binding in Normal mode and never touches the chord
            if self.mode == Mode::Normal {
                return Ok(Disposition::Unhandled);
            }
            self.command_line.clear();
            return self.enter_mode(Mode::Normal);
        }

        match self.mode {
            Mode::Normal => self.handle_normal_mode(&key),
            Mode::Insert => Ok(Disposition::Unhandled),
            Mode::Command => self.handle_command_mode(&key),
        }
    }

    fn handle_normal_mode(&mut self, key: &KeyEvent) -> Result<Disposition, IpcError> {
        self.chord.push(KeyToken::from_event(key), self.clock.now());

        if let Some(message) = self.chords.lookup(self.chord.tokens()) {
            self.chord.clear();
            self.post(message)?;
            return Ok(Disposition::Handled);
        }

        let message = match key.code {
            KeyCode::Char('h') => Message::GoBack,
            KeyCode::Char('l') => Message::GoForward,
            KeyCode::Char('j') => Message::ScrollDown,
            KeyCode::Char('k') => Message::ScrollUp,
            KeyCode::Char('r') => Message::Reload,
            KeyCode::Char('R') => Message::HardReload,
            KeyCode::Char('?') => Message::ShowHelp,

            // Mode switching
            KeyCode::Char('i') => return self.enter_mode(Mode::Insert),
            KeyCode::Char(':') => {
                self.command_line.clear();
                return self.enter_mode(Mode::Command);
            }

            _ => return Ok(Disposition::Unhandled),
        };

        self.post(message)?;
        Ok(Disposition::Handled)
    }

    fn handle_command_mode(&mut self, key: &KeyEvent) -> Result<Disposition, IpcError> {
        if key.code == KeyCode::Enter {
            let line = std::mem::take(&mut self.command_line);
            self.post(Message::ExecuteCommand(line))?;
            return self.enter_mode(Mode::Normal);
        }

        // Editing keys (Backspace, arrows) are deliberately not interpreted
        match key::printable_char(key) {
            Some(c) => {
                self.command_line.push(c);
                Ok(Disposition::Handled)
            }
            None => Ok(Disposition::Unhandled),
        }
    }

    /// Switch mode and announce it; chords never survive a switch
    fn enter_mode(&mut self, mode: Mode) -> Result<Disposition, IpcError> {
        tracing::debug!(from = ?self.mode, to = ?mode, "mode change");
        self.chord.clear();
        self.mode = mode;
        self.post(mode.entry_message())?;
        Ok(Disposition::Handled)
    }

    fn post(&self, message: Message) -> Result<(), IpcError> {
        let payload = message.payload();
        tracing::debug!(%payload, "post message");
        self.ipc.post_message(&payload).map_err(|err| {
            tracing::warn!(error = %err, "host unreachable");
            err
        })
    }
}
