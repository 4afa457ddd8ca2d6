use super::{LoadError, TextSource};
use arboard::Clipboard;

/// Current text contents of the system clipboard.
#[derive(Debug, Default)]
pub struct ClipboardText;

impl TextSource for ClipboardText {
    fn get_text(&mut self) -> Result<String, LoadError> {
        let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
        clipboard
            .get_text()
            .map_err(|e| LoadError::Clipboard(e.to_string()))
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
