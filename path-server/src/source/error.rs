//! Document source error types.

/// Errors that can occur while fetching a timetable page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("timed out after {0}s")]
    Timeout(u64),

    /// Server answered with a non-success status
    #[error("status {status}")]
    Status { status: u16 },

    /// Reading a local page failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No page with this name is available
    #[error("page not found: {0}")]
    NotFound(String),
}
