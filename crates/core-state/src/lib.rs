//! Editor state: the document, its file association, the status message,
//! the current input mode with its prompt line, and the quit guard.
//!
//! Presentation state (cursor, viewport offsets) lives in `core-model::View`;
//! this crate stays document-centric so the dispatcher and the renderer can
//! both borrow it without reaching into each other.
//!
//! Status messages:
//! * A message is stamped with the instant it was set; it is shown while its
//!   age is below `message_ttl` and suppressed afterwards (the text is kept so
//!   tests and logs can still inspect the last message).
//!
//! Quit guard:
//! * A quit request on a dirty document consumes one unit of the guard and is
//!   refused; any other key restores the guard to its configured value. Once
//!   the document is clean or the guard is exhausted, quit goes through.

use core_text::Document;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default display duration for status messages.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);
/// Default number of refused quit attempts on a dirty document.
pub const DEFAULT_QUIT_TIMES: u32 = 1;

/// What a prompt collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// File name for a save when the document has none yet.
    SaveAs,
}

impl PromptKind {
    /// Literal label shown before the typed text.
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as",
        }
    }

    /// Literal hint shown after the typed text.
    pub fn hint(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "(ESC to cancel)",
        }
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys edit and navigate the document.
    #[default]
    Normal,
    /// Keys edit the prompt line.
    Prompt(PromptKind),
}

/// Growable single-line input buffer used while `Mode::Prompt` is active.
#[derive(Debug, Default, Clone)]
pub struct PromptState {
    buf: String,
}

impl PromptState {
    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append a printable ASCII byte. Anything else is ignored.
    pub fn push_byte(&mut self, b: u8) {
        if b.is_ascii() && !b.is_ascii_control() {
            self.buf.push(b as char);
        }
    }

    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    /// Take the collected text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    /// Status line text for `kind`. The typed text is appended as a plain
    /// value between the fixed label and hint.
    pub fn status_text(&self, kind: PromptKind) -> String {
        let mut s = String::with_capacity(kind.label().len() + self.buf.len() + 20);
        s.push_str(kind.label());
        s.push_str(": ");
        s.push_str(&self.buf);
        s.push(' ');
        s.push_str(kind.hint());
        s
    }
}

/// Most recent status message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

/// Outcome of a quit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitDecision {
    Quit,
    /// Refused; carries the number of further requests that were still
    /// required before this one.
    Refused { remaining: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct QuitGuard {
    initial: u32,
    remaining: u32,
}

impl Default for QuitGuard {
    fn default() -> Self {
        Self::new(DEFAULT_QUIT_TIMES)
    }
}

impl QuitGuard {
    pub fn new(times: u32) -> Self {
        Self {
            initial: times,
            remaining: times,
        }
    }

    pub fn request(&mut self, dirty: bool) -> QuitDecision {
        if dirty && self.remaining > 0 {
            let remaining = self.remaining;
            self.remaining -= 1;
            QuitDecision::Refused { remaining }
        } else {
            QuitDecision::Quit
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.initial;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Top-level editor state container.
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub mode: Mode,
    pub prompt: PromptState,
    pub quit_guard: QuitGuard,
    pub message_ttl: Duration,
    status: Option<StatusMessage>,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_name: None,
            mode: Mode::Normal,
            prompt: PromptState::default(),
            quit_guard: QuitGuard::default(),
            message_ttl: DEFAULT_MESSAGE_TTL,
            status: None,
        }
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Replace the status message, stamping it with the current instant.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, now: Instant) {
        let text = msg.into();
        tracing::debug!(target: "state.status", len = text.len(), "status_set");
        self.status = Some(StatusMessage { text, set_at: now });
    }

    /// Last message regardless of age.
    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Message text if it is non-empty and still within its display window at `now`.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        let m = self.status.as_ref()?;
        if m.text.is_empty() {
            return None;
        }
        if now.saturating_duration_since(m.set_at) < self.message_ttl {
            Some(m.text.as_str())
        } else {
            None
        }
    }

    /// Display name for the status bar.
    pub fn display_name(&self) -> Option<String> {
        self.file_name
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quit_guard_refuses_once_when_dirty() {
        let mut g = QuitGuard::new(1);
        assert_eq!(g.request(true), QuitDecision::Refused { remaining: 1 });
        assert_eq!(g.request(true), QuitDecision::Quit);
    }

    #[test]
    fn quit_guard_resets_after_other_key() {
        let mut g = QuitGuard::new(2);
        assert_eq!(g.request(true), QuitDecision::Refused { remaining: 2 });
        g.reset();
        assert_eq!(g.remaining(), 2);
        assert_eq!(g.request(true), QuitDecision::Refused { remaining: 2 });
        assert_eq!(g.request(true), QuitDecision::Refused { remaining: 1 });
        assert_eq!(g.request(true), QuitDecision::Quit);
    }

    #[test]
    fn quit_guard_passes_clean_document() {
        let mut g = QuitGuard::new(3);
        assert_eq!(g.request(false), QuitDecision::Quit);
    }

    #[test]
    fn prompt_accepts_printable_only() {
        let mut p = PromptState::default();
        for b in b"a\x01b\tc\x7f" {
            p.push_byte(*b);
        }
        assert_eq!(p.buffer(), "abc");
        p.backspace();
        assert_eq!(p.buffer(), "ab");
        assert_eq!(p.take(), "ab");
        assert!(p.is_empty());
    }

    #[test]
    fn prompt_text_keeps_buffer_literal() {
        let mut p = PromptState::default();
        for b in b"%s%d{}" {
            p.push_byte(*b);
        }
        assert_eq!(p.status_text(PromptKind::SaveAs), "Save as: %s%d{} (ESC to cancel)");
    }

    #[test]
    fn status_message_expires_after_ttl() {
        let mut st = EditorState::new(Document::default());
        let t0 = Instant::now();
        st.set_status_at("hello", t0);
        assert_eq!(st.visible_status(t0), Some("hello"));
        assert_eq!(st.visible_status(t0 + Duration::from_secs(4)), Some("hello"));
        assert_eq!(st.visible_status(t0 + Duration::from_secs(5)), None);
        assert_eq!(st.last_status().map(|m| m.text.as_str()), Some("hello"));
    }

    #[test]
    fn empty_status_is_not_visible() {
        let mut st = EditorState::new(Document::default());
        let t0 = Instant::now();
        st.set_status_at("", t0);
        assert_eq!(st.visible_status(t0), None);
    }
}
