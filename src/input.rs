//! Raw input classification.
//!
//! Keys arrive as single bytes. Printable bytes and newlines are typed into
//! the active text area; every other control byte resolves to a [`Command`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const CTRL_F: u8 = 6;
pub const BACKSPACE: u8 = 8;
pub const CTRL_O: u8 = 15;
pub const CTRL_Q: u8 = 17;
pub const CTRL_S: u8 = 19;

/// Editor commands bound to control bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Open,
    Save,
    RemoveByte,
    Find,
    Cancel,
}

/// A classified input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    /// A byte to type into the active text area
    Byte(u8),
    /// A control byte resolved to a command
    Command(Command),
}

/// Map a control byte to its command. Unbound bytes cancel.
pub const fn resolve_command(byte: u8) -> Command {
    match byte {
        BACKSPACE => Command::RemoveByte,
        CTRL_F => Command::Find,
        CTRL_O => Command::Open,
        CTRL_Q => Command::Quit,
        CTRL_S => Command::Save,
        _ => Command::Cancel,
    }
}

/// Classify a raw byte, normalizing carriage return to line feed.
pub const fn classify_byte(byte: u8) -> UserInput {
    let byte = if byte == b'\r' { b'\n' } else { byte };
    if byte < 32 && byte != b'\n' {
        UserInput::Command(resolve_command(byte))
    } else {
        UserInput::Byte(byte)
    }
}

/// Translate a terminal key event into the byte a raw-mode terminal would
/// deliver for it.
///
/// Non-ASCII characters and keys without a byte encoding yield `None`.
pub fn key_to_byte(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            u8::try_from(c.to_ascii_lowercase())
                .ok()
                .filter(u8::is_ascii_lowercase)
                .map(|b| b & 0x1f)
        }
        KeyCode::Char(c) => u8::try_from(c).ok().filter(u8::is_ascii),
        KeyCode::Backspace => Some(BACKSPACE),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Esc => Some(0x1b),
        _ => None,
    }
}
