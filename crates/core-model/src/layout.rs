//! Screen geometry.
//!
//! The terminal is split into a text area on top and two fixed rows at the
//! bottom: the status bar and the message line. All sizes are terminal cells.

/// Rows reserved below the text area (status bar + message line).
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Terminal width; also the width of every drawn line.
    pub cols: u16,
    /// Full terminal height.
    pub terminal_rows: u16,
}

impl Layout {
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            terminal_rows: rows,
        }
    }

    /// Rows available for document text.
    pub fn text_rows(&self) -> usize {
        usize::from(self.terminal_rows.saturating_sub(RESERVED_ROWS))
    }

    pub fn text_cols(&self) -> usize {
        usize::from(self.cols)
    }
}
