//! Single line storage: raw bytes plus their tab-expanded render form.
//!
//! Invariant: every method that mutates `raw` rebuilds `render` before it
//! returns, so `render()` is never stale.

/// Tab stop used when nothing else is configured.
pub const DEFAULT_TAB_STOP: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(bytes: &[u8], tab_stop: usize) -> Self {
        let mut row = Self {
            raw: bytes.to_vec(),
            render: Vec::new(),
        };
        row.update(tab_stop);
        row
    }

    /// Raw content, exactly as loaded or typed (no line terminator).
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Display form with tabs expanded.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Display length in columns.
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Rebuild `render` from `raw`.
    pub fn update(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.raw.iter().filter(|&&b| b == b'\t').count();
        self.render.clear();
        self.render.reserve(self.raw.len() + tabs * (tab_stop - 1));
        for &b in &self.raw {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }

    /// Map a raw column to its display column. `cx` past the end is clamped.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut rx = 0;
        for &b in self.raw.iter().take(cx) {
            if b == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    /// Insert `b` before raw column `at` (clamped to the row length).
    pub fn insert_byte(&mut self, at: usize, b: u8, tab_stop: usize) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, b);
        self.update(tab_stop);
    }

    /// Remove the byte at `at`. Returns false (and does nothing) when out of range.
    pub fn delete_byte(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update(tab_stop);
        true
    }

    pub fn append_bytes(&mut self, bytes: &[u8], tab_stop: usize) {
        self.raw.extend_from_slice(bytes);
        self.update(tab_stop);
    }

    /// Split off the bytes from `at` to the end, leaving `0..at` behind.
    pub fn split_off(&mut self, at: usize, tab_stop: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update(tab_stop);
        tail
    }

    /// Display slice `[start, start+width)` clipped to the render length.
    pub fn render_slice(&self, start: usize, width: usize) -> &[u8] {
        if start >= self.render.len() {
            return &[];
        }
        let end = start.saturating_add(width).min(self.render.len());
        &self.render[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_expands_to_next_stop() {
        let row = Row::new(b"a\tb", 8);
        assert_eq!(row.render(), b"a       b");
        assert_eq!(row.render_len(), 9);
        assert_eq!(row.cx_to_rx(2, 8), 8);
        assert_eq!(row.cx_to_rx(3, 8), 9);
    }

    #[test]
    fn leading_tab_and_full_stop() {
        let row = Row::new(b"\t12345678\tx", 8);
        assert_eq!(row.cx_to_rx(1, 8), 8);
        assert_eq!(row.cx_to_rx(9, 8), 16);
        assert_eq!(row.cx_to_rx(10, 8), 24);
        assert_eq!(row.render_len(), 25);
    }

    #[test]
    fn cx_to_rx_agrees_with_render_length() {
        let row = Row::new(b"x\t\ty\tzz", 4);
        assert_eq!(row.cx_to_rx(row.len(), 4), row.render_len());
        // clamp beyond the end
        assert_eq!(row.cx_to_rx(100, 4), row.render_len());
    }

    #[test]
    fn render_tracks_mutations() {
        let mut row = Row::new(b"ab", 8);
        row.insert_byte(1, b'\t', 8);
        assert_eq!(row.raw(), b"a\tb");
        assert_eq!(row.render(), b"a       b");
        assert!(row.delete_byte(1, 8));
        assert_eq!(row.render(), b"ab");
        row.append_bytes(b"\tc", 8);
        assert_eq!(row.render(), b"ab      c");
        let tail = row.split_off(2, 8);
        assert_eq!(tail, b"\tc");
        assert_eq!(row.render(), b"ab");
    }

    #[test]
    fn insert_clamps_and_delete_guards() {
        let mut row = Row::new(b"ab", 8);
        row.insert_byte(99, b'c', 8);
        assert_eq!(row.raw(), b"abc");
        assert!(!row.delete_byte(3, 8));
        assert_eq!(row.raw(), b"abc");
    }

    #[test]
    fn render_slice_clips() {
        let row = Row::new(b"hello", 8);
        assert_eq!(row.render_slice(1, 3), b"ell");
        assert_eq!(row.render_slice(3, 10), b"lo");
        assert_eq!(row.render_slice(5, 10), b"");
        assert_eq!(row.render_slice(9, 10), b"");
    }
}
