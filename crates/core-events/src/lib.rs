//! Logical key events shared by the decoder and the dispatcher.
//!
//! The terminal delivers a byte stream. The decoder in `core-input` folds
//! escape sequences into synthesized keys and passes every other byte through
//! untouched, so the dispatcher only ever sees a `Key`.
//!
//! Ordinal policy:
//! * `Key::Byte(b)` keeps the literal byte value (0..=255) as its ordinal.
//! * `Key::Escape` is the bare ESC byte (27) emitted when a sequence is
//!   incomplete or unrecognized.
//! * Synthesized navigation keys live at `SYNTHESIZED_BASE` (1000) and above,
//!   in a fixed order, so they can never collide with a byte value.

use std::fmt;

/// First ordinal used by synthesized (multi-byte) keys.
pub const SYNTHESIZED_BASE: u32 = 1000;

/// Escape byte.
pub const ESC: u8 = 0x1b;
/// Carriage return, sent by Enter in raw mode.
pub const ENTER: u8 = b'\r';
/// DEL byte, sent by the Backspace key on most terminals.
pub const BACKSPACE: u8 = 0x7f;

/// Map a letter to its Ctrl-combination byte (`ctrl(b'q') == 0x11`).
#[inline]
pub const fn ctrl(k: u8) -> u8 {
    k & 0x1f
}

/// A single decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte that is not the start of a recognized escape sequence.
    Byte(u8),
    /// Bare escape (lone ESC or an unrecognized / truncated sequence).
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Numeric ordinal of the key. Bytes map to themselves, synthesized keys
    /// to `SYNTHESIZED_BASE..`.
    pub const fn code(self) -> u32 {
        match self {
            Key::Byte(b) => b as u32,
            Key::Escape => ESC as u32,
            Key::ArrowLeft => SYNTHESIZED_BASE,
            Key::ArrowRight => SYNTHESIZED_BASE + 1,
            Key::ArrowUp => SYNTHESIZED_BASE + 2,
            Key::ArrowDown => SYNTHESIZED_BASE + 3,
            Key::Delete => SYNTHESIZED_BASE + 4,
            Key::Home => SYNTHESIZED_BASE + 5,
            Key::End => SYNTHESIZED_BASE + 6,
            Key::PageUp => SYNTHESIZED_BASE + 7,
            Key::PageDown => SYNTHESIZED_BASE + 8,
        }
    }

    /// True for keys produced from a multi-byte escape sequence.
    pub const fn is_synthesized(self) -> bool {
        self.code() >= SYNTHESIZED_BASE
    }

    /// True when this is `Ctrl-<k>`.
    pub fn is_ctrl(self, k: u8) -> bool {
        self == Key::Byte(ctrl(k))
    }

    /// Printable ASCII (not a control byte, below 128).
    pub fn printable(self) -> Option<u8> {
        match self {
            Key::Byte(b) if b.is_ascii() && !b.is_ascii_control() => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Byte(b) if b.is_ascii_graphic() || *b == b' ' => write!(f, "'{}'", *b as char),
            Key::Byte(b) if *b < 0x20 => write!(f, "Ctrl-{}", (b | 0x40) as char),
            Key::Byte(b) => write!(f, "0x{b:02x}"),
            other => write!(f, "{other:?}"),
        }
    }
}
