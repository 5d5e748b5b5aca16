//! Editor actions: key translation, dispatch and file I/O.
//!
//! A decoded [`core_events::Key`] is first translated into an [`Action`]
//! according to the current [`core_state::Mode`], then applied to the
//! [`core_model::EditorModel`] by [`dispatch`].

mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, handle_key};
pub use key_translator::translate_key;

/// Shown once at startup.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    /// Delete the byte left of the cursor, joining rows at column 0.
    Backspace,
    /// Step right, then backspace.
    DeleteForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Char(u8),
    Backspace,
    Accept,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Quit,
    Prompt(PromptAction),
    Noop,
}
