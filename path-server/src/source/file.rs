//! Timetable pages saved on disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::document::Document;

use super::DocumentSource;
use super::error::FetchError;

/// Serves `{dir}/{page}.html` files, for running without network access.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    /// Create a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, page: &str) -> PathBuf {
        self.dir.join(format!("{page}.html"))
    }
}

impl DocumentSource for FileSource {
    async fn fetch(&self, page: &str) -> Result<Document, FetchError> {
        match tokio::fs::read_to_string(self.path(page)).await {
            Ok(html) => Ok(Document::parse(&html)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::NotFound(page.to_string())),
            Err(e) => Err(FetchError::Io(e)),
        }
    }

    fn location(&self, page: &str) -> String {
        self.path(page).display().to_string()
    }
}
