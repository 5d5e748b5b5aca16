//! Row-based text store, coordinate mapping and cursor-relative edits.
//!
//! Coordinate spaces:
//! * raw column `cx`: byte index into `Row::raw`, `0..=row.len()`.
//! * render column `rx`: display column into `Row::render`; derived from `cx`
//!   via `Row::cx_to_rx` and never stored independently.
//! * row `cy`: `0..=doc.len()`; `cy == doc.len()` is the virtual past-end row
//!   where typing appends a new line.
//!
//! Every edit below keeps the cursor inside those ranges and leaves each
//! touched row's render buffer in sync with its raw content.

mod document;
mod row;

pub use document::Document;
pub use row::{DEFAULT_TAB_STOP, Row};

/// Insertion point expressed as (row, raw column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cy: usize,
    pub cx: usize,
}

impl Cursor {
    pub fn new(cy: usize, cx: usize) -> Self {
        Self { cy, cx }
    }

    pub fn origin() -> Self {
        Self::default()
    }
}

impl Document {
    /// Insert byte `c` at the cursor and advance it. Typing on the virtual
    /// past-end row first appends an empty row. A `\n` byte is refused:
    /// rows never hold a line terminator.
    pub fn insert_char(&mut self, cursor: &mut Cursor, c: u8) {
        if c == b'\n' {
            tracing::debug!(target: "text.guard", cy = cursor.cy, cx = cursor.cx, "insert_newline_byte_refused");
            return;
        }
        if cursor.cy == self.len() {
            self.push_row(b"");
        }
        self.row_insert_byte(cursor.cy, cursor.cx, c);
        cursor.cx += 1;
    }

    /// Backspace. Removes the byte left of the cursor, or joins the current
    /// row onto the previous one when the cursor is at column 0.
    pub fn delete_char(&mut self, cursor: &mut Cursor) {
        if cursor.cy >= self.len() {
            return;
        }
        if cursor.cx == 0 && cursor.cy == 0 {
            return;
        }
        if cursor.cx > 0 {
            self.row_delete_byte(cursor.cy, cursor.cx - 1);
            cursor.cx -= 1;
        } else {
            let prev = cursor.cy - 1;
            cursor.cx = self.row_len(prev);
            let moved = self
                .row(cursor.cy)
                .map(|r| r.raw().to_vec())
                .unwrap_or_default();
            self.row_append_bytes(prev, &moved);
            self.delete_row(cursor.cy);
            cursor.cy = prev;
        }
    }

    /// Enter. Splits the current row at the cursor (or opens an empty row
    /// above it at column 0) and moves to the start of the next row.
    pub fn insert_newline(&mut self, cursor: &mut Cursor) {
        if cursor.cx == 0 {
            self.insert_row(cursor.cy, b"");
        } else {
            let tail = self.row_split_off(cursor.cy, cursor.cx);
            self.insert_row(cursor.cy + 1, &tail);
        }
        cursor.cy += 1;
        cursor.cx = 0;
    }

    /// Display column for `cursor`; 0 on the virtual row.
    pub fn render_column(&self, cursor: &Cursor) -> usize {
        self.row(cursor.cy)
            .map_or(0, |row| row.cx_to_rx(cursor.cx, self.tab_stop()))
    }
}
