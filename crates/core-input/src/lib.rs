//! Key decoding over a raw byte stream.
//!
//! The terminal is in raw mode, so keys arrive as single bytes or as short
//! escape sequences. [`KeyDecoder`] turns that stream into one [`Key`] per
//! call; escape sequences it cannot complete or does not know collapse into
//! [`Key::Escape`].

mod source;

pub use source::{ByteSource, ScriptedSource, StdinSource};

use std::io;
use std::time::Duration;

use core_events::{ESC, Key};
use thiserror::Error;
use tracing::trace;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum InputError {
    #[error("read from terminal failed: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    Disconnected,
}

pub struct KeyDecoder<S> {
    source: S,
    poll_interval: Duration,
    escape_timeout: Duration,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self::with_timeouts(source, DEFAULT_POLL_INTERVAL, DEFAULT_ESCAPE_TIMEOUT)
    }

    pub fn with_timeouts(source: S, poll_interval: Duration, escape_timeout: Duration) -> Self {
        Self {
            source,
            poll_interval,
            escape_timeout,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Block until one key is available and return it.
    pub fn read_key(&mut self) -> Result<Key, InputError> {
        let first = loop {
            if let Some(b) = self.source.read_byte(self.poll_interval)? {
                break b;
            }
        };
        let key = if first == ESC {
            self.read_escape()?
        } else {
            Key::Byte(first)
        };
        trace!(target: "input.decode", key = %key, code = key.code(), "key");
        Ok(key)
    }

    /// Bytes following an ESC. A missing byte (timeout or end of input)
    /// means the user pressed Escape on its own.
    fn continuation(&mut self) -> Result<Option<u8>, InputError> {
        match self.source.read_byte(self.escape_timeout) {
            Err(InputError::Disconnected) => Ok(None),
            other => other,
        }
    }

    fn read_escape(&mut self) -> Result<Key, InputError> {
        let Some(first) = self.continuation()? else {
            return Ok(Key::Escape);
        };
        let Some(second) = self.continuation()? else {
            return Ok(Key::Escape);
        };
        let key = match (first, second) {
            (b'[', d @ b'0'..=b'9') => {
                let Some(term) = self.continuation()? else {
                    return Ok(Key::Escape);
                };
                if term == b'~' {
                    tilde_key(d)
                } else {
                    None
                }
            }
            (b'[', b'A') => Some(Key::ArrowUp),
            (b'[', b'B') => Some(Key::ArrowDown),
            (b'[', b'C') => Some(Key::ArrowRight),
            (b'[', b'D') => Some(Key::ArrowLeft),
            (b'[', b'H') | (b'O', b'H') => Some(Key::Home),
            (b'[', b'F') | (b'O', b'F') => Some(Key::End),
            _ => None,
        };
        if key.is_none() {
            trace!(target: "input.decode", first, second, "unknown_escape_sequence");
        }
        Ok(key.unwrap_or(Key::Escape))
    }
}

/// `ESC [ <d> ~` forms.
fn tilde_key(d: u8) -> Option<Key> {
    match d {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}
