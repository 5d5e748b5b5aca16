//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion` - cursor movement
//! * `edit`   - text mutation through the document's edit engine
//! * `prompt` - save, save-as prompt editing and acceptance
//!
//! Quit requests are handled here because they interact with every other
//! action: any action that is not a quit re-arms the quit guard.

use crate::Action;
use core_events::Key;
use core_model::EditorModel;
use core_state::{EditorState, Mode, QuitDecision};

mod edit;
mod motion;
mod prompt;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed.
    pub dirty: bool,
    /// The control loop should exit.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Translate `key` for the current mode and dispatch it.
pub fn handle_key(key: Key, model: &mut EditorModel) -> DispatchResult {
    let action = crate::translate_key(model.state().mode, key);
    tracing::trace!(target: "actions.dispatch", key = %key, ?action, "key");
    dispatch(action, model)
}

/// Apply an action to the model.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    let result = match action {
        Action::Quit => return handle_quit(state),
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Save => prompt::handle_save(state),
        Action::Prompt(p) => prompt::handle_prompt(p, state),
        Action::Noop => DispatchResult::clean(),
    };
    state.quit_guard.reset();
    // The prompt text stays on the message line for as long as the prompt is open.
    if let Mode::Prompt(kind) = state.mode {
        prompt::refresh_prompt_status(state, kind);
        return DispatchResult::dirty();
    }
    result
}

fn handle_quit(state: &mut EditorState) -> DispatchResult {
    match state.quit_guard.request(state.is_dirty()) {
        QuitDecision::Quit => {
            tracing::info!(target: "actions.dispatch", dirty = state.is_dirty(), "quit");
            DispatchResult::quit()
        }
        QuitDecision::Refused { remaining } => {
            tracing::debug!(target: "actions.dispatch", remaining, "quit_refused");
            state.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
            ));
            DispatchResult::dirty()
        }
    }
}
