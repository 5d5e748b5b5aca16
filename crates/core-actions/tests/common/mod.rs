#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::Key;
use core_model::{EditorModel, Layout};
use core_state::EditorState;
use core_text::Document;

/// Model over `lines` on an 80x24 terminal (22 text rows).
pub fn model(lines: &[&str]) -> EditorModel {
    model_sized(lines, 80, 24)
}

pub fn model_sized(lines: &[&str], cols: u16, rows: u16) -> EditorModel {
    let doc = Document::from_lines(lines.iter().copied(), 8);
    EditorModel::new(EditorState::new(doc), Layout::from_terminal(cols, rows))
}

pub fn empty_model() -> EditorModel {
    EditorModel::new(
        EditorState::new(Document::default()),
        Layout::from_terminal(80, 24),
    )
}

/// Feed keys through translation and dispatch, scrolling after each like the
/// control loop does. Returns the last result.
pub fn press(model: &mut EditorModel, keys: &[Key]) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for &k in keys {
        last = handle_key(k, model);
        model.scroll();
    }
    last
}

pub fn type_text(model: &mut EditorModel, text: &str) {
    let keys: Vec<Key> = text.bytes().map(Key::Byte).collect();
    press(model, &keys);
}

pub fn raws(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
        .collect()
}

pub fn status(model: &EditorModel) -> String {
    model
        .state()
        .last_status()
        .map(|m| m.text.clone())
        .unwrap_or_default()
}

pub const CTRL_Q: Key = Key::Byte(0x11);
pub const CTRL_S: Key = Key::Byte(0x13);
pub const CTRL_H: Key = Key::Byte(0x08);
pub const ENTER: Key = Key::Byte(b'\r');
pub const BACKSPACE: Key = Key::Byte(0x7f);
