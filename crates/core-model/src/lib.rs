//! Editor model: the owned aggregate driven by the control loop.
//!
//! `EditorModel` pairs the document-centric `EditorState` with the single
//! `View` (cursor and viewport). The control loop owns exactly one model and
//! lends it out by `&mut`; there is no global editor state.
//!
//! Viewport invariants (after `View::scroll`):
//! * `cy` lies in `[row_offset, row_offset + rows)` when `rows > 0`.
//! * `rx` lies in `[col_offset, col_offset + cols)` when `cols > 0`.
//! * Offsets are the minimal adjustment from their previous values; there is
//!   no margin or hysteresis.

use core_state::EditorState;
use core_text::{Cursor, Document};
mod layout;
pub use layout::{Layout, RESERVED_ROWS};

/// Visible window into the render space of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows on screen.
    pub rows: usize,
    /// Text columns on screen.
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Adopt the text area of `layout`. Returns whether the size changed.
    pub fn resize(&mut self, layout: Layout) -> bool {
        let (rows, cols) = (layout.text_rows(), layout.text_cols());
        if self.rows == rows && self.cols == cols {
            return false;
        }
        self.rows = rows;
        self.cols = cols;
        true
    }
}

/// Compute the offset that keeps `pos` inside `[offset, offset+extent)`.
/// Returns `None` when no change is needed (or `extent` is zero).
pub fn compute_scroll_intent(offset: usize, pos: usize, extent: usize) -> Option<usize> {
    if extent == 0 {
        return None;
    }
    if pos < offset {
        return Some(pos);
    }
    if pos >= offset + extent {
        return Some(pos + 1 - extent);
    }
    None
}

#[derive(Debug, Clone, Default)]
pub struct View {
    pub cursor: Cursor,
    /// Render column of the cursor as of the last `scroll`.
    pub rx: usize,
    pub viewport: Viewport,
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cursor: Cursor::origin(),
            rx: 0,
            viewport,
        }
    }

    /// Recompute `rx` and reconcile both offsets so the cursor is visible.
    /// Returns true when either offset changed.
    pub fn scroll(&mut self, doc: &Document) -> bool {
        self.rx = doc.render_column(&self.cursor);
        let vp = &mut self.viewport;
        let mut changed = false;
        if let Some(row) = compute_scroll_intent(vp.row_offset, self.cursor.cy, vp.rows) {
            vp.row_offset = row;
            changed = true;
        }
        if let Some(col) = compute_scroll_intent(vp.col_offset, self.rx, vp.cols) {
            vp.col_offset = col;
            changed = true;
        }
        if changed {
            tracing::trace!(
                target: "model.scroll",
                cy = self.cursor.cy,
                rx = self.rx,
                row_offset = vp.row_offset,
                col_offset = vp.col_offset,
                "viewport_adjusted"
            );
        }
        changed
    }
}

/// Owned aggregate of document state and presentation state.
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, layout: Layout) -> Self {
        Self {
            state,
            view: View::new(Viewport::new(layout.text_rows(), layout.text_cols())),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of state and view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Track a new terminal size. Offsets are kept; the next `scroll`
    /// brings the cursor back into view.
    pub fn resize(&mut self, layout: Layout) -> bool {
        self.view.viewport.resize(layout)
    }

    /// Run scroll reconciliation against the current document.
    pub fn scroll(&mut self) -> bool {
        let (state, view) = self.split_state_and_view();
        view.scroll(&state.document)
    }
}
