//! Where timetable pages come from.
//!
//! The live source fetches pages from the PATH website; the file source
//! serves saved copies from disk; the memory source is for tests and
//! embedding.

mod error;
mod file;
mod http;
mod memory;

use std::future::Future;

use crate::document::Document;

pub use error::FetchError;
pub use file::FileSource;
pub use http::{DEFAULT_BASE_URL, HttpSource, SourceConfig};
pub use memory::MemorySource;

/// Trait for fetching timetable pages by name.
///
/// This abstraction lets the schedule service run against the live site,
/// local files, or canned pages.
pub trait DocumentSource: Send + Sync + 'static {
    /// Fetch and parse the page published under `page`.
    fn fetch(&self, page: &str) -> impl Future<Output = Result<Document, FetchError>> + Send;

    /// Human-readable location of `page`, used in error messages.
    fn location(&self, page: &str) -> String;
}
