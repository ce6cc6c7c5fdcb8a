//! Key types for console input.
//!
//! A simplified subset of crossterm's key model, enough for line editing.

use bitflags::bitflags;
use crossterm::event;

/// The keys a line editor cares about.
///
/// Anything that types text arrives as `Char`. Keys with no editing meaning
/// are dropped during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key that types this character.
    Char(char),
    /// Ends line input.
    Enter,
    /// Removes the character before the cursor.
    Backspace,
    /// Removes the character under the cursor.
    Delete,
    /// Types `'\t'`.
    Tab,
    /// Types `'\x1b'`.
    Esc,
    /// Cursor one column left.
    Left,
    /// Cursor one column right.
    Right,
    /// Cursor one row up.
    Up,
    /// Cursor one row down.
    Down,
    /// Cursor to the start of the line.
    Home,
    /// Cursor to the end of the line.
    End,
}

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key
        const SHIFT = 0b0000_0001;
        /// Control key
        const CONTROL = 0b0000_0010;
        /// Alt/Option key
        const ALT = 0b0000_0100;
        /// Super/Command/Windows key
        const SUPER = 0b0000_1000;
    }
}

impl std::fmt::Debug for KeyModifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// One key press: the named key plus held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInfo {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the key press.
    pub modifiers: KeyModifiers,
}

impl KeyInfo {
    /// Create a key press without modifiers.
    #[inline]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a character key press.
    #[inline]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The character this key types, if any.
    ///
    /// Enter, Tab, Backspace and Esc report their control characters.
    pub const fn character(self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) => Some(c),
            KeyCode::Enter => Some('\r'),
            KeyCode::Tab => Some('\t'),
            KeyCode::Backspace => Some('\x08'),
            KeyCode::Esc => Some('\x1b'),
            _ => None,
        }
    }

    /// Convert a crossterm key event.
    ///
    /// Returns `None` for key releases and for keys with no counterpart.
    pub fn from_crossterm(key: event::KeyEvent) -> Option<Self> {
        if key.kind == event::KeyEventKind::Release {
            return None;
        }
        let code = convert_key_code(key.code)?;
        Some(Self {
            code,
            modifiers: convert_modifiers(key.modifiers),
        })
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, mods.contains(event::KeyModifiers::SHIFT));
    out.set(KeyModifiers::CONTROL, mods.contains(event::KeyModifiers::CONTROL));
    out.set(KeyModifiers::ALT, mods.contains(event::KeyModifiers::ALT));
    out.set(KeyModifiers::SUPER, mods.contains(event::KeyModifiers::SUPER));
    out
}
