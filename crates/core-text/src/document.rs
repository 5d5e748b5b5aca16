//! Ordered row store with a dirty counter.
//!
//! Row indices are always contiguous `0..len()`. Out-of-range indices passed
//! to row mutations are contract violations by the caller; they are ignored
//! (logged on `text.guard`) rather than allowed to corrupt the store.

use crate::row::{DEFAULT_TAB_STOP, Row};

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    dirty: u64,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a clean document from in-memory lines (test and fixture helper).
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self::new(tab_stop);
        for line in lines {
            doc.push_row(line.as_ref());
        }
        doc.dirty = 0;
        doc
    }

    /// Load file content: split on `\n`, strip trailing `\r` from every line.
    /// A trailing newline does not produce an extra empty row. The result is clean.
    pub fn from_bytes(bytes: &[u8], tab_stop: usize) -> Self {
        let mut doc = Self::new(tab_stop);
        let mut rest = bytes;
        while !rest.is_empty() {
            let (line, next) = match rest.iter().position(|&b| b == b'\n') {
                Some(i) => (&rest[..i], &rest[i + 1..]),
                None => (rest, &rest[rest.len()..]),
            };
            let mut end = line.len();
            while end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }
            doc.push_row(&line[..end]);
            rest = next;
        }
        doc.dirty = 0;
        doc
    }

    /// Serialize every row followed by a single `\n` (last row included).
    /// The byte count written on save is the returned buffer's length.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(row.raw());
            buf.push(b'\n');
        }
        buf
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw length of a row; 0 for the virtual past-end row (or any invalid index).
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Change the tab stop and re-render every row.
    pub fn set_tab_stop(&mut self, tab_stop: usize) {
        self.tab_stop = tab_stop.max(1);
        for row in &mut self.rows {
            row.update(self.tab_stop);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Number of mutations since the last load or save.
    pub fn dirty_count(&self) -> u64 {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    fn touch(&mut self) {
        self.dirty = self.dirty.saturating_add(1);
    }

    /// Insert a new row at `at` (`0..=len()`), shifting later rows down.
    pub fn insert_row(&mut self, at: usize, bytes: &[u8]) {
        if at > self.rows.len() {
            tracing::debug!(target: "text.guard", at, len = self.rows.len(), "insert_row_out_of_range");
            return;
        }
        self.rows.insert(at, Row::new(bytes, self.tab_stop));
        self.touch();
    }

    /// Append a row at the end.
    pub fn push_row(&mut self, bytes: &[u8]) {
        self.insert_row(self.rows.len(), bytes);
    }

    /// Remove the row at `at`, shifting later rows up.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            tracing::debug!(target: "text.guard", at, len = self.rows.len(), "delete_row_out_of_range");
            return;
        }
        self.rows.remove(at);
        self.touch();
    }

    pub fn row_insert_byte(&mut self, idx: usize, at: usize, b: u8) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(idx) {
            row.insert_byte(at, b, tab_stop);
            self.touch();
        }
    }

    pub fn row_delete_byte(&mut self, idx: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(idx) {
            if row.delete_byte(at, tab_stop) {
                self.touch();
            }
        }
    }

    pub fn row_append_bytes(&mut self, idx: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(idx) {
            row.append_bytes(bytes, tab_stop);
            self.touch();
        }
    }

    /// Truncate row `idx` to `at` bytes, returning the removed tail.
    pub fn row_split_off(&mut self, idx: usize, at: usize) -> Vec<u8> {
        let tab_stop = self.tab_stop;
        match self.rows.get_mut(idx) {
            Some(row) => {
                let tail = row.split_off(at, tab_stop);
                self.touch();
                tail
            }
            None => Vec::new(),
        }
    }
}
