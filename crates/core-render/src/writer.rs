//! Frame writer: an ordered list of terminal commands encoded into one
//! byte buffer.
//!
//! Invariants:
//! * Commands preserve ordering; nothing reaches the terminal mid-frame.
//! * Positions are absolute with a (0,0) origin; caller ensures bounds.
//! * Text is raw bytes. Row content is not required to be UTF-8.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    /// Cursor to the top-left cell.
    Home,
    MoveTo(u16, u16),
    /// Erase from the cursor to the end of the line.
    ClearToEol,
    Reverse,
    ResetAttributes,
    Print(Vec<u8>),
    NewLine,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn push(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }

    pub fn print(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.cmds.push(Command::Print(bytes.to_vec()));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Encode all commands into ANSI bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::with_capacity(4096);
        for c in &self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::Home => out.extend_from_slice(b"\x1b[H"),
                Command::MoveTo(x, y) => queue!(out, MoveTo(*x, *y))?,
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::ResetAttributes => out.extend_from_slice(b"\x1b[m"),
                Command::Print(bytes) => out.extend_from_slice(bytes),
                Command::NewLine => out.extend_from_slice(b"\r\n"),
            }
        }
        Ok(out)
    }
}

/// Write a finished frame in a single call and flush.
pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> Result<()> {
    out.write_all(frame)?;
    out.flush()?;
    Ok(())
}
