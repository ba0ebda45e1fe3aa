use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};

use nto_core::ports::{ClipboardError, ClipboardPort};

/// OS clipboard reader backed by `clipboard-rs`.
///
/// Only the text flavor is consulted; anything else on the clipboard
/// reads as `None`.
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("ClipboardContext::new failed: {e}"))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let ctx = self.inner.lock().unwrap();

        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }

        match ctx.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(err) => Err(ClipboardError::Unavailable(err.to_string())),
        }
    }
}
