//! System clipboard access behind a small write-only trait.

use crate::error::Result;

/// Write-only clipboard. One call overwrites whatever the clipboard held.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard via `arboard`.
///
/// The handle is opened on first use and kept for the lifetime of the window;
/// on X11 the selection is only served while the owning handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()?;
                log::debug!("System clipboard opened.");
                clipboard
            }
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if let Err(e) = self.handle()?.set_text(text) {
            // Reopened on the next copy.
            self.inner = None;
            return Err(e.into());
        }
        Ok(())
    }
}
