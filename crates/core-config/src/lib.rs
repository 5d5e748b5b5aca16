//! Configuration loading and parsing.
//!
//! Reads `tilde.toml` from the working directory, falling back to the
//! platform config dir (`<config_dir>/tilde/tilde.toml`). Every field has a
//! default, so a missing file, a missing table or an unparsable file all
//! yield a usable `Config`. Unknown fields are ignored.
//!
//! ```toml
//! [editor]
//! tab_stop = 8
//! quit_times = 1
//! message_timeout_secs = 5
//!
//! [input]
//! escape_timeout_ms = 100
//! poll_interval_ms = 100
//! ```
//!
//! `Config::effective` clamps out-of-range values; each clamp is logged on
//! the `config` target with the raw and clamped values.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "tilde.toml";
pub const MAX_TAB_STOP: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u32,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_times: Self::default_quit_times(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        8
    }
    const fn default_quit_times() -> u32 {
        1
    }
    const fn default_message_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// How long to wait for each continuation byte of an escape sequence.
    #[serde(default = "InputConfig::default_escape_timeout_ms")]
    pub escape_timeout_ms: u64,
    /// Length of one blocking read slice while waiting for a key.
    #[serde(default = "InputConfig::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            escape_timeout_ms: Self::default_escape_timeout_ms(),
            poll_interval_ms: Self::default_poll_interval_ms(),
        }
    }
}

impl InputConfig {
    const fn default_escape_timeout_ms() -> u64 {
        100
    }
    const fn default_poll_interval_ms() -> u64 {
        100
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Values after clamping, ready for the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effective {
    pub tab_stop: usize,
    pub quit_times: u32,
    pub message_ttl: Duration,
    pub escape_timeout: Duration,
    pub poll_interval: Duration,
}

/// Config path following platform conventions, preferring the working directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tilde").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            source: Some(path),
            file,
        }),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn effective(&self) -> Effective {
        let raw_tab = self.file.editor.tab_stop;
        let tab_stop = raw_tab.clamp(1, MAX_TAB_STOP);
        if tab_stop != raw_tab {
            info!(target: "config", raw = raw_tab, clamped = tab_stop, "tab_stop_clamped");
        }
        let raw_poll = self.file.input.poll_interval_ms;
        let poll_ms = raw_poll.max(1);
        if poll_ms != raw_poll {
            info!(target: "config", raw = raw_poll, clamped = poll_ms, "poll_interval_clamped");
        }
        let raw_esc = self.file.input.escape_timeout_ms;
        let esc_ms = raw_esc.max(1);
        if esc_ms != raw_esc {
            info!(target: "config", raw = raw_esc, clamped = esc_ms, "escape_timeout_clamped");
        }
        Effective {
            tab_stop,
            quit_times: self.file.editor.quit_times,
            message_ttl: Duration::from_secs(self.file.editor.message_timeout_secs),
            escape_timeout: Duration::from_millis(esc_ms),
            poll_interval: Duration::from_millis(poll_ms),
        }
    }
}
