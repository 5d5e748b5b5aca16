//! Status bar composition.
//!
//! Two-stage pipeline:
//! 1. `compose_status` produces an ordered vector of `StatusSegment` items.
//! 2. `format_status` renders those segments into the left and right halves
//!    of the bar.
//!
//! Layout onto a terminal width (`layout_status`) is separate: the left half
//! is truncated to the width, then spaces are added until the right half fits
//! flush against the right edge. If it never fits exactly it is omitted.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Longest file name shown, in characters.
pub const MAX_NAME_CHARS: usize = 20;
pub const NO_NAME: &str = "[No Name]";

/// What the status bar needs to know.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a str>,
    pub line_count: usize,
    /// 0-based cursor row.
    pub line: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    LineCount(usize),
    Modified(bool),
    /// 1-based cursor row over the row count, right-aligned.
    Position { line_1: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub left: String,
    pub right: String,
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(n) if n.chars().count() > MAX_NAME_CHARS => {
            Cow::Owned(n.chars().take(MAX_NAME_CHARS).collect())
        }
        Some(n) => Cow::Borrowed(n),
        None => Cow::Borrowed(NO_NAME),
    };
    vec![
        StatusSegment::FileName(name),
        StatusSegment::LineCount(ctx.line_count),
        StatusSegment::Modified(ctx.dirty),
        StatusSegment::Position {
            line_1: ctx.line + 1,
            total: ctx.line_count,
        },
    ]
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> StatusLine {
    let mut line = StatusLine::default();
    for seg in segments {
        match seg {
            StatusSegment::FileName(name) => line.left.push_str(name),
            StatusSegment::LineCount(n) => {
                let _ = write!(line.left, " - {n} lines ");
            }
            StatusSegment::Modified(true) => line.left.push_str("(modified)"),
            StatusSegment::Modified(false) => {}
            StatusSegment::Position { line_1, total } => {
                let _ = write!(line.right, "{line_1}/{total}");
            }
        }
    }
    line
}

pub fn build_status(ctx: &StatusContext) -> StatusLine {
    format_status(&compose_status(ctx))
}

/// Fit a status line to exactly `cols` bytes of bar content.
pub fn layout_status(line: &StatusLine, cols: usize) -> Vec<u8> {
    let left = line.left.as_bytes();
    let right = line.right.as_bytes();
    let mut out = Vec::with_capacity(cols);
    let mut len = left.len().min(cols);
    out.extend_from_slice(&left[..len]);
    while len < cols {
        if cols - len == right.len() {
            out.extend_from_slice(right);
            break;
        }
        out.push(b' ');
        len += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(name: Option<&str>, count: usize, line: usize, dirty: bool) -> StatusContext<'_> {
        StatusContext {
            file_name: name,
            line_count: count,
            line,
            dirty,
        }
    }

    #[test]
    fn clean_named_file() {
        let s = build_status(&ctx(Some("notes.txt"), 3, 0, false));
        assert_eq!(s.left, "notes.txt - 3 lines ");
        assert_eq!(s.right, "1/3");
    }

    #[test]
    fn unnamed_dirty_buffer() {
        let s = build_status(&ctx(None, 1, 0, true));
        assert_eq!(s.left, "[No Name] - 1 lines (modified)");
        assert_eq!(s.right, "1/1");
    }

    #[test]
    fn long_names_are_cut_to_twenty_chars() {
        let segs = compose_status(&ctx(Some("abcdefghijklmnopqrstuvwxyz.txt"), 0, 0, false));
        assert_eq!(
            segs[0],
            StatusSegment::FileName(Cow::Borrowed("abcdefghijklmnopqrst"))
        );
    }

    #[test]
    fn virtual_row_position_exceeds_count() {
        let s = build_status(&ctx(Some("a"), 2, 2, false));
        assert_eq!(s.right, "3/2");
    }

    #[test]
    fn layout_pads_right_half_flush() {
        let line = StatusLine {
            left: "abc".into(),
            right: "1/2".into(),
        };
        assert_eq!(layout_status(&line, 10), b"abc    1/2".to_vec());
    }

    #[test]
    fn layout_truncates_left_and_drops_right() {
        let line = StatusLine {
            left: "abcdefgh".into(),
            right: "1/2".into(),
        };
        assert_eq!(layout_status(&line, 5), b"abcde".to_vec());
        // Right half only fits at an exact offset; one column short means it is dropped.
        assert_eq!(layout_status(&line, 10), b"abcdefgh  ".to_vec());
    }
}
