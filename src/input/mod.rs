use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Supplies raw text to a reading session. Called once per session start.
pub trait TextSource {
    fn get_text(&mut self) -> Result<String, LoadError>;

    /// Short label for status lines and logs.
    fn describe(&self) -> String;
}

/// Text held in memory, e.g. typed into the command deck or passed by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineText(pub String);

impl InlineText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextSource for InlineText {
    fn get_text(&mut self) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}

pub mod clipboard;
pub mod file;

pub use clipboard::ClipboardText;
pub use file::FileText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_returns_content() {
        let mut source = InlineText::new("Hello, world!");
        assert_eq!(source.get_text().unwrap(), "Hello, world!");
        assert_eq!(source.get_text().unwrap(), "Hello, world!");
    }

    #[test]
    fn test_inline_text_may_be_empty() {
        let mut source = InlineText::default();
        assert_eq!(source.get_text().unwrap(), "");
    }

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");
        let err = LoadError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }
}
