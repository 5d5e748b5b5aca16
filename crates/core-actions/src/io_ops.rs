//! File I/O for the editor: loading at startup and saving on demand.

use anyhow::{Context, Result};
use core_state::EditorState;
use core_text::Document;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no file name")]
    NoFileName,
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Read `path` into a clean document. Failure is fatal for the caller.
pub fn open_file(path: &Path, tab_stop: usize) -> Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("open {}", path.display()))?;
    let doc = Document::from_bytes(&bytes, tab_stop);
    tracing::info!(target: "io", path = %path.display(), bytes = bytes.len(), rows = doc.len(), "file_opened");
    Ok(doc)
}

/// Write the document to the state's file name, replacing any existing
/// content. On success the document is marked clean and the number of
/// bytes written is returned; on failure it stays dirty.
pub fn write_file(state: &mut EditorState) -> Result<usize, SaveError> {
    let Some(path) = state.file_name.clone() else {
        return Err(SaveError::NoFileName);
    };
    let bytes = state.document.to_bytes();
    match std::fs::write(&path, &bytes) {
        Ok(()) => {
            state.document.mark_clean();
            tracing::info!(target: "io", path = %path.display(), bytes = bytes.len(), "file_written");
            Ok(bytes.len())
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), ?e, "file_write_error");
            Err(e.into())
        }
    }
}
