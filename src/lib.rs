//! # doc_outline
//!
//! Heuristic document outline extraction: converts the geometric/typographic
//! layout of a parsed document (text spans with position, font size, and
//! boldness) into a semantic outline — a document title plus an ordered,
//! leveled list of H1/H2/H3 headings.
//!
//! The crate serves downstream consumers that need navigable structure
//! (tables of contents, search indices, accessibility outlines) from
//! documents that carry no explicit structural tags. It consumes spans as
//! produced by an external page-content parser and owns the output schema;
//! it never touches document bytes itself.
//!
//! ## Pipeline
//!
//! - [`profile`]: dominant (most frequent) font size per page, the body-text
//!   baseline that makes every later threshold self-calibrating.
//! - [`title`]: most prominent text near the top of page 1, with generator
//!   artifact stripping, multi-line joining, and a filename-stem fallback.
//! - [`detector`]: per-span rule chain (numbered section → structural
//!   keyword → size + emphasis → uppercase), deduplicated page-locally and
//!   document-globally.
//! - [`levels`]: numbered prefixes level by depth; everything else levels by
//!   font-size tiers derived from the candidate population, with bold and
//!   keyword fallbacks and a minimum-size floor.
//! - [`extractor`]: the orchestrator, one document in, one
//!   [`DocumentOutline`] out.
//!
//! ## Quick Start
//!
//! ```
//! use doc_outline::{Document, OutlineExtractor, Page, TextSpan};
//!
//! let doc = Document::new(
//!     "whitepaper",
//!     vec![Page::new(1, vec![
//!         TextSpan::new("Grid Storage Economics in 2026", 21.0, false, 1, 72.0, 60.0),
//!         TextSpan::new("1. Introduction", 14.0, true, 1, 72.0, 140.0),
//!         TextSpan::new("Storage deployments have tripled since the", 10.0, false, 1, 72.0, 170.0),
//!         TextSpan::new("previous reporting period, driven by falling", 10.0, false, 1, 72.0, 185.0),
//!     ])],
//! );
//!
//! let result = OutlineExtractor::new().extract(&doc);
//! assert_eq!(result.title, "Grid Storage Economics in 2026");
//! assert_eq!(result.outline.len(), 1);
//! ```
//!
//! Extraction is a pure function of its input: no shared state survives a
//! call, so independent documents can be processed on worker threads with a
//! single extractor and no synchronization.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input model
pub mod span;

// Pipeline stages
pub mod config;
pub mod dedup;
pub mod detector;
pub mod extractor;
pub mod levels;
pub mod profile;
pub mod rules;
pub mod title;

// Output model and calibration
pub mod outline;
pub mod overrides;

// Re-exports
pub use config::OutlineConfig;
pub use error::{Error, Result};
pub use extractor::OutlineExtractor;
pub use outline::{DocumentOutline, HeadingLevel, OutlineEntry};
pub use overrides::{OverrideEntry, OverrideTable};
pub use span::{Document, Page, SpanSource, TextSpan};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting operations never panic on NaN coordinates.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).expect("both finite"),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_extractor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlineExtractor>();
    }
}
