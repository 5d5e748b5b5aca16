//! Byte sources feeding the key decoder.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::InputError;

/// A stream of raw input bytes read with a bounded wait.
///
/// `Ok(None)` means nothing arrived within `timeout`; the caller decides
/// whether to keep waiting.
pub trait ByteSource {
    fn read_byte(&mut self, timeout: Duration) -> Result<Option<u8>, InputError>;
}

/// Bytes from the process stdin, pumped by a dedicated reader thread.
///
/// The thread ends on EOF or on the first read error. The error is handed
/// over the channel; after that the source reports `Disconnected`.
pub struct StdinSource {
    rx: Receiver<io::Result<u8>>,
}

impl StdinSource {
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("tilde-stdin".into())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = [0u8; 64];
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            for &b in &buf[..n] {
                                if tx.send(Ok(b)).is_err() {
                                    return;
                                }
                            }
                        }
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => {
                            let _ = tx.send(Err(e));
                            break;
                        }
                    }
                }
                tracing::debug!(target: "input.decode", "stdin_pump_exit");
            })?;
        Ok(Self { rx })
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self, timeout: Duration) -> Result<Option<u8>, InputError> {
        match self.rx.recv_timeout(timeout) {
            Ok(Ok(b)) => Ok(Some(b)),
            Ok(Err(e)) => Err(InputError::Io(e)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(InputError::Disconnected),
        }
    }
}

/// In-memory byte queue, used for tests and replaying captured input.
///
/// Once drained it yields `Ok(None)` while open and `Disconnected` after
/// [`ScriptedSource::close`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<u8>,
    closed: bool,
}

impl ScriptedSource {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            queue: bytes.as_ref().iter().copied().collect(),
            closed: false,
        }
    }

    /// A script that reports `Disconnected` once its bytes are consumed.
    pub fn closed(bytes: impl AsRef<[u8]>) -> Self {
        let mut s = Self::new(bytes);
        s.close();
        s
    }

    pub fn push(&mut self, bytes: impl AsRef<[u8]>) {
        self.queue.extend(bytes.as_ref().iter().copied());
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self, _timeout: Duration) -> Result<Option<u8>, InputError> {
        match self.queue.pop_front() {
            Some(b) => Ok(Some(b)),
            None if self.closed => Err(InputError::Disconnected),
            None => Ok(None),
        }
    }
}
