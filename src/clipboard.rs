use arboard::Clipboard;
use tracing::{debug, warn};

/// Handle on the system clipboard, opened on first use and kept open.
///
/// On X11 and Wayland the copied text is served by this process, so the
/// handle must outlive every copy; dropping it hands the selection over to a
/// clipboard manager when one is running.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Copies `text` to the clipboard. Failures are logged, never raised.
    pub fn copy(&mut self, text: &str) {
        if self.inner.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(err) => {
                    warn!("clipboard unavailable: {err}");
                    return;
                }
            }
        }

        if let Some(clipboard) = self.inner.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => debug!("copied {} bytes to the clipboard", text.len()),
                Err(err) => warn!("failed to copy to the clipboard: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_opens_lazily() {
        assert!(!SystemClipboard::default().is_open());
    }

    #[test]
    fn test_handle_survives_between_copies() {
        let mut clipboard = SystemClipboard::default();
        clipboard.copy("cat");
        let opened = clipboard.is_open();
        clipboard.copy("dog");
        // Without a display server nothing opens; otherwise the first handle stays.
        assert_eq!(clipboard.is_open(), opened);
    }
}
