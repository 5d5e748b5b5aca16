//! Key -> Action translation.
//!
//! Stateless: the mode alone decides the mapping. In prompt mode only the
//! prompt editing keys mean anything; every other key is a no-op.

use crate::{Action, EditKind, MotionKind, PromptAction};
use core_events::{BACKSPACE, ENTER, Key, ctrl};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: Key) -> Action {
    match mode {
        Mode::Normal => translate_normal(key),
        Mode::Prompt(_) => translate_prompt(key),
    }
}

fn translate_normal(key: Key) -> Action {
    match key {
        Key::Byte(ENTER) => Action::Edit(EditKind::InsertNewline),
        Key::Byte(b) if b == ctrl(b'q') || b == ctrl(b'c') => Action::Quit,
        Key::Byte(b) if b == ctrl(b's') => Action::Save,
        Key::Byte(b) if b == BACKSPACE || b == ctrl(b'h') => Action::Edit(EditKind::Backspace),
        Key::Byte(b) if b == ctrl(b'l') || b == ctrl(b'j') => Action::Noop,
        Key::Byte(b) => Action::Edit(EditKind::InsertByte(b)),
        Key::Escape => Action::Noop,
        Key::Delete => Action::Edit(EditKind::DeleteForward),
        Key::Home => Action::Motion(MotionKind::LineStart),
        Key::End => Action::Motion(MotionKind::LineEnd),
        Key::PageUp => Action::Motion(MotionKind::PageUp),
        Key::PageDown => Action::Motion(MotionKind::PageDown),
        Key::ArrowLeft => Action::Motion(MotionKind::Left),
        Key::ArrowRight => Action::Motion(MotionKind::Right),
        Key::ArrowUp => Action::Motion(MotionKind::Up),
        Key::ArrowDown => Action::Motion(MotionKind::Down),
    }
}

fn translate_prompt(key: Key) -> Action {
    match key {
        Key::Delete => Action::Prompt(PromptAction::Backspace),
        Key::Byte(b) if b == BACKSPACE || b == ctrl(b'h') => Action::Prompt(PromptAction::Backspace),
        Key::Escape => Action::Prompt(PromptAction::Cancel),
        Key::Byte(ENTER) => Action::Prompt(PromptAction::Accept),
        Key::Byte(b) if b.is_ascii() && !b.is_ascii_control() => Action::Prompt(PromptAction::Char(b)),
        _ => Action::Noop,
    }
}
