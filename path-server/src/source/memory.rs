//! Timetable pages held in memory.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::document::Document;

use super::DocumentSource;
use super::error::FetchError;

/// Serves canned HTML pages and counts how many fetches were made.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Arc<HashMap<String, String>>,
    fetches: Arc<AtomicUsize>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn with_page(mut self, page: impl Into<String>, html: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.pages).insert(page.into(), html.into());
        self
    }

    /// Number of fetches made so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, page: &str) -> Result<Document, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Let concurrent callers overlap the way a real fetch would.
        tokio::task::yield_now().await;

        self.pages
            .get(page)
            .map(|html| Document::parse(html))
            .ok_or_else(|| FetchError::NotFound(page.to_string()))
    }

    fn location(&self, page: &str) -> String {
        format!("memory:{page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_pages_and_counts() {
        let source = MemorySource::new().with_page("A_B", "<table></table>");

        assert!(source.fetch("A_B").await.is_ok());
        assert!(source.fetch("B_A").await.is_err());
        assert_eq!(source.fetch_count(), 2);
        assert_eq!(source.location("A_B"), "memory:A_B");
    }

    #[tokio::test]
    async fn clones_share_the_counter() {
        let source = MemorySource::new().with_page("A_B", "<table></table>");
        let clone = source.clone();
        clone.fetch("A_B").await.unwrap();
        assert_eq!(source.fetch_count(), 1);
    }
}
