//! Externally visible outline types.
//!
//! This crate owns the output schema; an external writer serializes
//! [`DocumentOutline`] as-is:
//!
//! ```json
//! {
//!   "title": "...",
//!   "outline": [
//!     { "level": "H1", "text": "1. Introduction", "page": 1 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Hierarchy depth of an accepted heading (H1 coarsest, H3 finest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
}

impl HeadingLevel {
    /// Hierarchy depth as a number (0 = H1, 2 = H3).
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
        }
    }

    /// Level for a numbered-section prefix of the given segment depth.
    ///
    /// One segment ("3.") is H1, two ("3.2") H2, three or more ("3.2.1") H3.
    /// This is a pure function of the depth; font-size heuristics never
    /// override it.
    ///
    /// # Examples
    ///
    /// ```
    /// use doc_outline::outline::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::from_numeric_depth(1), HeadingLevel::H1);
    /// assert_eq!(HeadingLevel::from_numeric_depth(2), HeadingLevel::H2);
    /// assert_eq!(HeadingLevel::from_numeric_depth(5), HeadingLevel::H3);
    /// ```
    pub fn from_numeric_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }
}

/// One leveled heading in a document's outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Hierarchy level
    pub level: HeadingLevel,
    /// Heading text, trimmed
    pub text: String,
    /// 1-based page on which the heading's span was found
    pub page: usize,
}

/// The complete extraction result for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title
    pub title: String,
    /// Ordered, leveled headings
    pub outline: Vec<OutlineEntry>,
}
