//! Key naming and chord tokens

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Prefix marking a control-modified token (e.g. `C-d`)
pub const CONTROL_PREFIX: &str = "C-";

/// One entry of the chord buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyToken(String);

impl KeyToken {
    /// Token for a key event: `C-` + key name when control is held
    pub fn from_event(key: &KeyEvent) -> Self {
        let name = key_name(key.code);
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            Self(format!("{CONTROL_PREFIX}{name}"))
        } else {
            Self(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for KeyToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Symbolic name of a key, following DOM `KeyboardEvent.key` naming
///
/// Character keys are named by the character itself, so `G` and `g` are
/// distinct names.
pub fn key_name(code: KeyCode) -> String {
    let name = match code {
        KeyCode::Char(c) => return c.to_string(),
        KeyCode::F(n) => return format!("F{n}"),
        KeyCode::Esc => "Escape",
        KeyCode::Enter => "Enter",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        _ => "Unidentified",
    };
    name.to_string()
}

/// Whether the key is the cancel key
pub fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Printable single character with no control or meta modifier held
pub fn printable_char(key: &KeyEvent) -> Option<char> {
    let blocked = KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META;
    match key.code {
        KeyCode::Char(c) if !c.is_control() && !key.modifiers.intersects(blocked) => Some(c),
        _ => None,
    }
}
