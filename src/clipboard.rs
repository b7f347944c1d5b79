//! System clipboard access.

use log::{debug, warn};

/// Puts `text` on the system clipboard. Copying is a convenience, never a
/// requirement: failures are logged and swallowed so a headless terminal or
/// missing clipboard daemon cannot take the session down.
pub fn copy(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => debug!("Copied {text:?} to clipboard"),
            Err(e) => warn!("Failed to copy to clipboard: {e}"),
        },
        Err(e) => warn!("Clipboard unavailable: {e}"),
    }
}
