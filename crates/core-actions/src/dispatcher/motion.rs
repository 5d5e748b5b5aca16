//! Cursor movement.
//!
//! Horizontal moves wrap across row boundaries; after every move the raw
//! column is clamped to the length of the row the cursor landed on (0 on
//! the virtual past-end row).

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;
use core_text::{Cursor, Document};

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let doc = &state.document;
    let before = view.cursor;
    match kind {
        MotionKind::PageUp | MotionKind::PageDown => page(kind, doc, view),
        MotionKind::LineStart => view.cursor.cx = 0,
        MotionKind::LineEnd => {
            if view.cursor.cy < doc.len() {
                view.cursor.cx = doc.row_len(view.cursor.cy);
            }
        }
        _ => step(kind, doc, &mut view.cursor),
    }
    tracing::trace!(target: "actions.dispatch", op = ?kind, cy = before.cy, cx = before.cx, to_cy = view.cursor.cy, to_cx = view.cursor.cx, "motion");
    DispatchResult::dirty()
}

/// One arrow step.
pub(crate) fn step(kind: MotionKind, doc: &Document, cursor: &mut Cursor) {
    match kind {
        MotionKind::Left => {
            if cursor.cx > 0 {
                cursor.cx -= 1;
            } else if cursor.cy > 0 {
                cursor.cy -= 1;
                cursor.cx = doc.row_len(cursor.cy);
            }
        }
        MotionKind::Right => {
            if let Some(row) = doc.row(cursor.cy) {
                if cursor.cx < row.len() {
                    cursor.cx += 1;
                } else {
                    cursor.cy += 1;
                    cursor.cx = 0;
                }
            }
        }
        MotionKind::Up => cursor.cy = cursor.cy.saturating_sub(1),
        MotionKind::Down => {
            if cursor.cy < doc.len() {
                cursor.cy += 1;
            }
        }
        _ => {}
    }
    cursor.cx = cursor.cx.min(doc.row_len(cursor.cy));
}

/// Jump to the top (bottom) screen row, then move a full screen up (down).
fn page(kind: MotionKind, doc: &Document, view: &mut View) {
    let rows = view.viewport.rows;
    let dir = if kind == MotionKind::PageUp {
        view.cursor.cy = view.viewport.row_offset;
        MotionKind::Up
    } else {
        view.cursor.cy = (view.viewport.row_offset + rows)
            .saturating_sub(1)
            .min(doc.len());
        MotionKind::Down
    };
    for _ in 0..rows {
        step(dir, doc, &mut view.cursor);
    }
    view.cursor.cx = view.cursor.cx.min(doc.row_len(view.cursor.cy));
}
