//! Outbound message definitions for keynav

use std::borrow::Cow;
use std::fmt;

/// Prefix of a submitted command line
pub const COMMAND_PREFIX: &str = "command:";

/// Messages the dispatcher posts to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Mode changes
    EnterNormalMode,
    EnterInsertMode,
    EnterCommandMode,

    // History
    GoBack,
    GoForward,

    // Scrolling
    ScrollDown,
    ScrollUp,
    ScrollTop,
    ScrollBottom,
    ScrollHalfDown,
    ScrollHalfUp,

    // Page
    Reload,
    HardReload,
    ShowHelp,

    // Location
    ShowUrl,
    CopyUrl,
    PasteUrl,

    // Command mode
    ExecuteCommand(String),
}

impl Message {
    /// Wire payload understood by the host
    pub fn payload(&self) -> Cow<'static, str> {
        let name = match self {
            Message::EnterNormalMode => "mode-normal",
            Message::EnterInsertMode => "mode-insert",
            Message::EnterCommandMode => "mode-command",
            Message::GoBack => "go-back",
            Message::GoForward => "go-forward",
            Message::ScrollDown => "scroll-down",
            Message::ScrollUp => "scroll-up",
            Message::ScrollTop => "scroll-top",
            Message::ScrollBottom => "scroll-bottom",
            Message::ScrollHalfDown => "scroll-half-down",
            Message::ScrollHalfUp => "scroll-half-up",
            Message::Reload => "reload",
            Message::HardReload => "hard-reload",
            Message::ShowHelp => "show-help",
            Message::ShowUrl => "show-url",
            Message::CopyUrl => "copy-url",
            Message::PasteUrl => "paste-url",
            Message::ExecuteCommand(line) => {
                return Cow::Owned(format!("{COMMAND_PREFIX}{line}"));
            }
        };
        Cow::Borrowed(name)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload())
    }
}
