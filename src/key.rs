//! Logical key events delivered by the host editor.
//!
//! The host's input layer (terminal parser, GUI toolkit, test harness) hands
//! the controller one [`KeyEvent`] per keypress: a symbolic [`KeyCode`] plus
//! a [`Modifiers`] mask. Printable characters arrive as [`KeyCode::Char`];
//! everything else uses a named variant. The controller never stores an
//! event past the handling call — events are consumed, not owned.

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// KeyCode
// ---------------------------------------------------------------------------

/// Identity of a key.
///
/// Named keys have dedicated variants; printable characters use
/// [`Char`](KeyCode::Char). This is the subset of keys a host realistically
/// routes through a modal dispatcher — function keys and lock keys never
/// reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A Unicode character (printable).
    Char(char),
    // ── Named keys ──────────────────────────────────────────────
    Enter,
    Tab,
    Backspace,
    Escape,
    Delete,
    // ── Navigation ──────────────────────────────────────────────
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl KeyCode {
    /// The resolved character, if this key carries one.
    ///
    /// Named keys (arrows, Escape, …) have no character; command buffering
    /// only applies to keys that do.
    #[inline]
    #[must_use]
    pub const fn char(self) -> Option<char> {
        match self {
            Self::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// The bit layout matches the Kitty keyboard protocol bitmask (also
    /// compatible with xterm CSI modifier encoding where `param = 1 + bitmask`),
    /// so hosts with terminal input parsers can pass their mask through
    /// unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
        const SUPER = 0b0000_1000;
        const HYPER = 0b0001_0000;
        const META  = 0b0010_0000;
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A single logical key press: key identity plus active modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key was pressed.
    pub code: KeyCode,
    /// Active modifier keys during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with explicit modifiers.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A press with no modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// A Ctrl+character press.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: Modifiers::CTRL,
        }
    }

    /// The resolved character, if the pressed key carries one.
    #[inline]
    #[must_use]
    pub const fn char(&self) -> Option<char> {
        self.code.char()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_of_printable() {
        assert_eq!(KeyCode::Char('x').char(), Some('x'));
        assert_eq!(KeyCode::Char('0').char(), Some('0'));
    }

    #[test]
    fn char_of_named_keys_is_none() {
        assert_eq!(KeyCode::Escape.char(), None);
        assert_eq!(KeyCode::Enter.char(), None);
        assert_eq!(KeyCode::PageDown.char(), None);
    }

    #[test]
    fn plain_has_no_modifiers() {
        let key = KeyEvent::plain(KeyCode::Char('j'));
        assert!(key.modifiers.is_empty());
        assert_eq!(key.char(), Some('j'));
    }

    #[test]
    fn ctrl_constructor() {
        let key = KeyEvent::ctrl('c');
        assert_eq!(key.code, KeyCode::Char('c'));
        assert_eq!(key.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn modifier_combinations() {
        let m = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(m.contains(Modifiers::CTRL));
        assert!(m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::ALT));
        assert_ne!(m, Modifiers::CTRL);
    }
}
