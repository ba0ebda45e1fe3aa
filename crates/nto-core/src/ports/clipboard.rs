use thiserror::Error;

/// Read access to the system clipboard's text flavor.
///
/// Reads are treated as fast, synchronous calls; adapters may lock an OS
/// context internally. `Ok(None)` means the clipboard currently holds no
/// text-flavored content, which the poller treats the same as a failed
/// read: skip the tick.
pub trait ClipboardPort: Send + Sync {
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
