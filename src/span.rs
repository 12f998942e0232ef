//! Text span representation for outline analysis.
//!
//! A span is a contiguous run of text sharing one font size/style/position,
//! as reported by an upstream page-content parser. This crate consumes spans
//! as-is and never touches the underlying document bytes.

use crate::error::Result;

/// A positioned text span on a single page.
///
/// Spans are immutable input data. `x`/`y` are the top-left corner of the
/// span's bounding box in page coordinates (y grows downward, so smaller `y`
/// means nearer the top of the page).
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The complete text string
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Whether the span is rendered bold
    pub bold: bool,
    /// 1-based page index
    pub page: usize,
    /// Left edge of the bounding box
    pub x: f32,
    /// Top edge of the bounding box
    pub y: f32,
}

impl TextSpan {
    /// Create a span directly from its fields.
    pub fn new(text: impl Into<String>, font_size: f32, bold: bool, page: usize, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            bold,
            page,
            x,
            y,
        }
    }

    /// Create a span from a parser-style bounding box `(x0, y0, x1, y1)`.
    ///
    /// Only the top-left corner participates in outline analysis; the far
    /// corner is accepted so parser output can be passed through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use doc_outline::span::TextSpan;
    ///
    /// let span = TextSpan::from_bbox("Introduction", 14.0, true, 1, (72.0, 96.0, 250.0, 112.0));
    /// assert_eq!(span.x, 72.0);
    /// assert_eq!(span.y, 96.0);
    /// ```
    pub fn from_bbox(
        text: impl Into<String>,
        font_size: f32,
        bold: bool,
        page: usize,
        bbox: (f32, f32, f32, f32),
    ) -> Self {
        Self::new(text, font_size, bold, page, bbox.0, bbox.1)
    }
}

/// All spans on a single page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// 1-based page index
    pub number: usize,
    /// Spans on this page, in parser order
    pub spans: Vec<TextSpan>,
}

impl Page {
    /// Create a page from its index and spans.
    pub fn new(number: usize, spans: Vec<TextSpan>) -> Self {
        Self { number, spans }
    }
}

/// A parsed document: a filename stem plus its pages.
///
/// The stem is the fallback title when no span on page 1 qualifies as a title
/// candidate, and the default fingerprint for override lookup.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Filename stem (no directory, no extension)
    pub stem: String,
    /// Pages in order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document from a stem and pages.
    pub fn new(stem: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            stem: stem.into(),
            pages,
        }
    }
}

/// A fallible producer of page spans.
///
/// Implement this when the upstream parser can fail per page (damaged content
/// streams, unsupported encodings). [`crate::OutlineExtractor::extract_from_source`]
/// propagates the failure as [`crate::Error::SpanSource`] so a batch caller can
/// skip the document and continue.
pub trait SpanSource {
    /// Filename stem of the document being read.
    fn stem(&self) -> &str;

    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Spans for the given 1-based page index.
    fn page_spans(&self, page: usize) -> Result<Vec<TextSpan>>;
}
