//! Frame composition.
//!
//! Each frame is rebuilt from scratch and encoded into one byte buffer:
//!
//! 1. hide cursor, cursor home;
//! 2. one line per text row: the visible render slice of the document row,
//!    or `~` past the end (with a centered welcome banner a third of the way
//!    down an empty document), each followed by erase-to-end-of-line and
//!    `\r\n`;
//! 3. the reverse-video status bar (see [`status`]);
//! 4. the message line, showing the status message while it is fresh;
//! 5. cursor placement relative to the viewport, show cursor.
//!
//! The whole buffer is written with a single `write_all` and flushed, so the
//! terminal never shows a half-drawn frame.

pub mod status;
pub mod writer;

use anyhow::Result;
use core_model::View;
use core_state::EditorState;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use status::{StatusContext, build_status, layout_status};
use writer::{Command, Writer, write_frame};

pub const WELCOME_PREFIX: &str = "Tilde editor -- version";

pub struct RenderEngine {
    version: String,
    frames: u64,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::with_version(env!("CARGO_PKG_VERSION"))
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            frames: 0,
        }
    }

    pub fn welcome(&self) -> String {
        format!("{WELCOME_PREFIX} {}", self.version)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Build the complete frame for `state` as seen through `view` at `now`.
    pub fn compose(&self, state: &EditorState, view: &View, now: Instant) -> Result<Vec<u8>> {
        let mut w = Writer::new();
        w.push(Command::HideCursor);
        w.push(Command::Home);
        self.draw_rows(&mut w, state, view);
        draw_status_bar(&mut w, state, view);
        draw_message_line(&mut w, state, view, now);
        let vp = &view.viewport;
        let x = view.rx.saturating_sub(vp.col_offset);
        let y = view.cursor.cy.saturating_sub(vp.row_offset);
        w.push(Command::MoveTo(clamp_u16(x), clamp_u16(y)));
        w.push(Command::ShowCursor);
        w.encode()
    }

    /// Compose and write one frame to `out`.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        state: &EditorState,
        view: &View,
        now: Instant,
    ) -> Result<()> {
        let frame = self.compose(state, view, now)?;
        write_frame(out, &frame)?;
        self.frames += 1;
        debug!(
            target: "render.frame",
            frame = self.frames,
            bytes = frame.len(),
            row_offset = view.viewport.row_offset,
            col_offset = view.viewport.col_offset,
            "frame_written"
        );
        Ok(())
    }

    fn draw_rows(&self, w: &mut Writer, state: &EditorState, view: &View) {
        let doc = &state.document;
        let vp = &view.viewport;
        for y in 0..vp.rows {
            let filerow = y + vp.row_offset;
            match doc.row(filerow) {
                Some(row) => w.print(row.render_slice(vp.col_offset, vp.cols)),
                None if doc.is_empty() && y == vp.rows / 3 => {
                    let welcome = self.welcome();
                    let shown = &welcome.as_bytes()[..welcome.len().min(vp.cols)];
                    let mut padding = (vp.cols - shown.len()) / 2;
                    if padding > 0 {
                        w.print(b"~");
                        padding -= 1;
                    }
                    w.print(&vec![b' '; padding]);
                    w.print(shown);
                }
                None => w.print(b"~"),
            }
            w.push(Command::ClearToEol);
            w.push(Command::NewLine);
        }
    }
}

fn draw_status_bar(w: &mut Writer, state: &EditorState, view: &View) {
    let name = state.display_name();
    let line = build_status(&StatusContext {
        file_name: name.as_deref(),
        line_count: state.document.len(),
        line: view.cursor.cy,
        dirty: state.is_dirty(),
    });
    w.push(Command::Reverse);
    w.print(&layout_status(&line, view.viewport.cols));
    w.push(Command::ResetAttributes);
    w.push(Command::NewLine);
}

fn draw_message_line(w: &mut Writer, state: &EditorState, view: &View, now: Instant) {
    w.push(Command::ClearToEol);
    if let Some(msg) = state.visible_status(now) {
        let bytes = msg.as_bytes();
        w.print(&bytes[..bytes.len().min(view.viewport.cols)]);
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
