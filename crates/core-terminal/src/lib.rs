//! Terminal mode management: raw mode on entry, restoration on exit.
//!
//! Raw mode turns off echo, canonical line buffering, signal keys (Ctrl-C,
//! Ctrl-Z), Ctrl-V, flow control (Ctrl-S, Ctrl-Q), CR-to-NL translation and
//! output post-processing, so every key reaches the editor as bytes and
//! frames must end lines with `\r\n`.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use tracing::{debug, warn};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    /// Terminal size as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enable raw mode")?;
            self.entered = true;
            execute!(stdout(), EnterAlternateScreen).context("enter alternate screen")?;
            debug!(target: "runtime", "terminal_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show).context("leave alternate screen")?;
            disable_raw_mode().context("disable raw mode")?;
            self.entered = false;
            debug!(target: "runtime", "terminal_restored");
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        window_size()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            warn!(target: "runtime", error = %e, "terminal_restore_failed");
        }
    }
}

impl TerminalGuard<'_> {
    pub fn size(&self) -> Result<(u16, u16)> {
        self.backend.size()
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            warn!(target: "runtime", error = %e, "terminal_restore_failed");
        }
    }
}

/// Current terminal size as `(cols, rows)`.
///
/// A zero-sized report is treated as a failure.
pub fn window_size() -> Result<(u16, u16)> {
    let (cols, rows) = crossterm::terminal::size().context("query terminal size")?;
    if cols == 0 || rows == 0 {
        anyhow::bail!("terminal reported zero size ({cols}x{rows})");
    }
    Ok((cols, rows))
}
