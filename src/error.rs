//! Error types for the outline extraction library.
//!
//! Heuristic failures are not errors: a document where nothing qualifies as a
//! heading yields an empty outline and a fallback title. Errors here cover the
//! structurally impossible cases only, chiefly a span source that cannot
//! deliver a page.

/// Result type alias for outline extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external span source failed to produce a page.
    #[error("span source error on page {page}: {reason}")]
    SpanSource {
        /// 1-based page index where the source failed
        page: usize,
        /// Reason reported by the source
        reason: String,
    },

    /// A span carried a page index outside the document's page range.
    #[error("span references page {found}, document has {pages} pages")]
    PageOutOfRange {
        /// Page index found on the span
        found: usize,
        /// Number of pages in the document
        pages: usize,
    },

    /// IO error (surfaced when a caller loads an override table from disk)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed override table
    #[error("invalid override table: {0}")]
    InvalidOverrides(#[from] serde_json::Error),
}
