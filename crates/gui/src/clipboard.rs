//! Clipboard output for saved grid state.
//!
//! Writes are fire-and-forget: every write hands back a [`ClipboardWrite`]
//! that resolves once the platform accepted (or refused) the text. Callers
//! may poll it, await it, or drop it.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard output is disabled in settings")]
    Disabled,
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write was dropped before completing")]
    Dropped,
}

/// Pending result of a single clipboard write
#[derive(Debug)]
pub struct ClipboardWrite {
    rx: oneshot::Receiver<Result<(), ClipboardError>>,
}

impl ClipboardWrite {
    /// Create a write whose result is delivered through the returned sender
    pub fn channel() -> (oneshot::Sender<Result<(), ClipboardError>>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    /// Create a write that has already completed
    pub fn ready(result: Result<(), ClipboardError>) -> Self {
        let (tx, write) = Self::channel();
        let _ = tx.send(result);
        write
    }

    /// Non-blocking check; `None` while the write is still in flight
    pub fn try_result(&mut self) -> Option<Result<(), ClipboardError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ClipboardError::Dropped)),
        }
    }

    /// Wait for the write to finish
    pub async fn result(self) -> Result<(), ClipboardError> {
        self.rx.await.unwrap_or(Err(ClipboardError::Dropped))
    }
}

/// Destination for serialized grid state
pub trait ClipboardSink {
    fn write_text(&mut self, text: String) -> ClipboardWrite;
}

/// Clipboard backed by the egui platform output.
///
/// The text is queued on the context and copied by the windowing backend
/// at the end of the frame. The write resolves `Ok` once queued; a platform
/// failure is only logged by the backend.
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard {
    fn write_text(&mut self, text: String) -> ClipboardWrite {
        self.ctx.copy_text(text);
        ClipboardWrite::ready(Ok(()))
    }
}

/// In-memory clipboard for headless runs. Clones share the same contents.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    inner: Arc<Mutex<MemoryContents>>,
}

#[derive(Default)]
struct MemoryContents {
    text: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn contents(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|c| c.text.clone())
    }

    /// Number of writes received
    pub fn write_count(&self) -> usize {
        self.inner.lock().map(|c| c.writes).unwrap_or(0)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: String) -> ClipboardWrite {
        match self.inner.lock() {
            Ok(mut contents) => {
                contents.text = Some(text);
                contents.writes += 1;
                ClipboardWrite::ready(Ok(()))
            }
            Err(e) => ClipboardWrite::ready(Err(ClipboardError::Unavailable(e.to_string()))),
        }
    }
}

/// Sink used when clipboard output is turned off; every write fails.
pub struct DisabledClipboard;

impl ClipboardSink for DisabledClipboard {
    fn write_text(&mut self, _text: String) -> ClipboardWrite {
        ClipboardWrite::ready(Err(ClipboardError::Disabled))
    }
}
