//! Text edit action handling (insert/backspace/delete/newline).
//!
//! Mutations go through the `Document` edit operations, which keep the
//! cursor inside the document and the row render buffers current.

use super::DispatchResult;
use super::motion;
use crate::{EditKind, MotionKind};
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let doc = &mut state.document;
    match kind {
        EditKind::InsertByte(b) => doc.insert_char(&mut view.cursor, b),
        EditKind::InsertNewline => doc.insert_newline(&mut view.cursor),
        EditKind::Backspace => doc.delete_char(&mut view.cursor),
        EditKind::DeleteForward => {
            motion::step(MotionKind::Right, doc, &mut view.cursor);
            doc.delete_char(&mut view.cursor);
        }
    }
    tracing::trace!(target: "actions.dispatch", op = ?kind, cy = before.cy, cx = before.cx, to_cy = view.cursor.cy, to_cx = view.cursor.cx, dirty = doc.dirty_count(), "edit");
    DispatchResult::dirty()
}
