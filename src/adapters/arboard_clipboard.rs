use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ClipboardWriter;
use crate::global_constants::{
    ERROR_CONTEXT_OPEN_CLIPBOARD, ERROR_CONTEXT_WRITE_CLIPBOARD, LOG_TAG_CLIPBOARD,
};

/// System clipboard. The handle is kept open after the first write so that X11 and
/// Wayland keep serving the copied text while the app runs.
pub struct ArboardClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn initialize() -> Self {
        log::debug!("{} initializing clipboard writer", LOG_TAG_CLIPBOARD);
        Self {
            clipboard: Mutex::new(None),
        }
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| anyhow::anyhow!("clipboard lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().context(ERROR_CONTEXT_OPEN_CLIPBOARD)?);
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!(ERROR_CONTEXT_OPEN_CLIPBOARD))?;

        clipboard
            .set_text(text.to_string())
            .context(ERROR_CONTEXT_WRITE_CLIPBOARD)?;

        log::info!("{} copied {}", LOG_TAG_CLIPBOARD, text);
        Ok(())
    }
}
