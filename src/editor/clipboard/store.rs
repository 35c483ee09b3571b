//! Backing stores for the clipboard text.

#[cfg(feature = "system-clipboard")]
use super::error::ClipboardError;
use super::error::ClipboardResult;

/// A single-string text clipboard.
///
/// The engine only ever reads or overwrites the whole string. Other programs may
/// overwrite a shared store at any time, so readers must not assume the text is
/// still what they wrote.
pub trait ClipboardStore: Send + Sync {
    fn read_text(&self) -> ClipboardResult<String>;
    fn write_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// In-process clipboard, private to one editing session.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ClipboardStore for MemoryClipboard {
    fn read_text(&self) -> ClipboardResult<String> {
        Ok(self.text.clone())
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.text.clear();
        self.text.push_str(text);
        Ok(())
    }
}

/// The operating system's text clipboard.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl ClipboardStore for SystemClipboard {
    fn read_text(&self) -> ClipboardResult<String> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Store(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // Non-text content is just "nothing we can paste"
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Store(e.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Store(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Store(e.to_string()))
    }
}

/// Which store a session should use; see [`crate::config::ClipboardBackend`].
pub fn store_for_backend(backend: crate::config::ClipboardBackend) -> Box<dyn ClipboardStore> {
    use crate::config::ClipboardBackend;

    match backend {
        ClipboardBackend::Memory => Box::new(MemoryClipboard::default()),
        #[cfg(feature = "system-clipboard")]
        ClipboardBackend::System => Box::new(SystemClipboard),
        #[cfg(not(feature = "system-clipboard"))]
        ClipboardBackend::System => {
            bevy::log::warn!(
                "System clipboard requested but the `system-clipboard` feature is disabled; using an in-process clipboard"
            );
            Box::new(MemoryClipboard::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_default_empty() {
        let store = MemoryClipboard::default();
        assert_eq!(store.read_text().unwrap(), "");
    }

    #[test]
    fn test_memory_clipboard_last_write_wins() {
        let mut store = MemoryClipboard::with_text("first");
        store.write_text("second").unwrap();
        assert_eq!(store.read_text().unwrap(), "second");
    }

    #[test]
    fn test_memory_backend_store() {
        let mut store = store_for_backend(crate::config::ClipboardBackend::Memory);
        store.write_text("abc").unwrap();
        assert_eq!(store.read_text().unwrap(), "abc");
    }
}
