//! Saving, and the save-as prompt it opens when the document has no name.
//!
//! The prompt is a mode rather than a nested read loop: `handle_save`
//! switches to `Mode::Prompt`, subsequent keys edit `PromptState`, and
//! acceptance resumes the save with the typed name. The dispatcher rewrites
//! the prompt line after every key while the prompt is open.

use super::DispatchResult;
use crate::PromptAction;
use crate::io_ops::{SaveError, write_file};
use core_state::{EditorState, Mode, PromptKind};

pub(crate) fn handle_save(state: &mut EditorState) -> DispatchResult {
    if state.file_name.is_none() {
        state.prompt.clear();
        state.mode = Mode::Prompt(PromptKind::SaveAs);
        tracing::debug!(target: "actions.dispatch", "save_as_prompt_opened");
        return DispatchResult::dirty();
    }
    save(state);
    DispatchResult::dirty()
}

pub(crate) fn handle_prompt(action: PromptAction, state: &mut EditorState) -> DispatchResult {
    let Mode::Prompt(kind) = state.mode else {
        return DispatchResult::clean();
    };
    match action {
        PromptAction::Char(b) => {
            state.prompt.push_byte(b);
        }
        PromptAction::Backspace => {
            state.prompt.backspace();
        }
        PromptAction::Cancel => {
            state.prompt.clear();
            state.mode = Mode::Normal;
            state.set_status("Save aborted");
            tracing::debug!(target: "actions.dispatch", "save_as_cancelled");
        }
        PromptAction::Accept => {
            if state.prompt.is_empty() {
                return DispatchResult::clean();
            }
            let name = state.prompt.take();
            state.mode = Mode::Normal;
            state.set_status("");
            match kind {
                PromptKind::SaveAs => {
                    state.file_name = Some(name.into());
                    save(state);
                }
            }
        }
    }
    DispatchResult::dirty()
}

pub(crate) fn refresh_prompt_status(state: &mut EditorState, kind: PromptKind) {
    let text = state.prompt.status_text(kind);
    state.set_status(text);
}

fn save(state: &mut EditorState) {
    match write_file(state) {
        Ok(n) => state.set_status(format!("{n} bytes written to disk")),
        Err(SaveError::NoFileName) => state.set_status("Save aborted"),
        Err(SaveError::Io(e)) => state.set_status(format!("Can't save! I/O error: {e}")),
    }
}
