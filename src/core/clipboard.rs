//! System clipboard export.

/// Write `text` to the system clipboard. Fire-and-forget: the caller shows
/// its confirmation for the attempt; a failed write is only logged.
pub fn copy_text(text: &str) {
    if let Err(e) = arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string())) {
        log::warn!("Clipboard write failed: {}", e);
    }
}
