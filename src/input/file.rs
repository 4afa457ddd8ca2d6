use super::{LoadError, TextSource};
use log::info;
use std::io;
use std::path::{Path, PathBuf};

/// A UTF-8 text file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileText {
    path: PathBuf,
}

impl FileText {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileText {
    fn get_text(&mut self) -> Result<String, LoadError> {
        load_file_safe(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn load_file_safe(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    info!("loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}
