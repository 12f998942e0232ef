//! The outline extraction pipeline.
//!
//! One function, one document in, one structured result out: compute the
//! font profile, pick the title, collect heading candidates page by page
//! through a fresh dedup context, sort into reading order, assign levels,
//! and apply any caller-supplied overrides.

use crate::config::OutlineConfig;
use crate::dedup::SeenHeadings;
use crate::detector::{self, HeadingCandidate};
use crate::error::{Error, Result};
use crate::levels;
use crate::outline::{DocumentOutline, OutlineEntry};
use crate::overrides::{offset_page, OverrideTable};
use crate::profile::FontProfile;
use crate::span::{Document, Page, SpanSource};
use crate::title;
use crate::utils::safe_float_cmp;

/// Heuristic outline extractor.
///
/// Holds configuration only; all per-document state lives inside
/// [`extract`](Self::extract), so one extractor can serve any number of
/// documents, concurrently if the caller wishes.
///
/// # Examples
///
/// ```
/// use doc_outline::{Document, OutlineExtractor, Page, TextSpan};
///
/// let doc = Document::new(
///     "sample",
///     vec![Page::new(1, vec![
///         TextSpan::new("A Very Short Example Document", 20.0, false, 1, 60.0, 50.0),
///         TextSpan::new("1. Introduction", 14.0, true, 1, 60.0, 120.0),
///         TextSpan::new("Body text sits at the dominant size.", 10.0, false, 1, 60.0, 150.0),
///         TextSpan::new("More body text at the same size here.", 10.0, false, 1, 60.0, 170.0),
///     ])],
/// );
///
/// let result = OutlineExtractor::new().extract(&doc);
/// assert_eq!(result.title, "A Very Short Example Document");
/// assert_eq!(result.outline[0].text, "1. Introduction");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    config: OutlineConfig,
    overrides: OverrideTable,
}

impl OutlineExtractor {
    /// Create an extractor with default configuration and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the given configuration.
    pub fn with_config(config: OutlineConfig) -> Self {
        Self {
            config,
            overrides: OverrideTable::new(),
        }
    }

    /// Attach a per-document override table.
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    /// Extract the outline of one document.
    ///
    /// Never fails: an empty or fully-filtered document yields the fallback
    /// title and an empty outline.
    pub fn extract(&self, doc: &Document) -> DocumentOutline {
        let entry = self.overrides.get(&doc.stem);
        let profile = FontProfile::compute(&doc.pages);

        let title = match entry.and_then(|e| e.title.clone()) {
            Some(title) => title,
            None => title::select_title(doc, profile.dominant(1), &self.config),
        };

        let mut candidates: Vec<HeadingCandidate> = Vec::new();
        let mut seen = SeenHeadings::new();
        for page in &doc.pages {
            let dominant = profile.dominant(page.number);
            candidates.extend(detector::detect_page(page, dominant, &self.config, &mut seen));
        }

        // Reading order across the whole document: page, then top-to-bottom,
        // then left-to-right.
        candidates.sort_by(|a, b| {
            a.page
                .cmp(&b.page)
                .then(safe_float_cmp(a.y, b.y))
                .then(safe_float_cmp(a.x, b.x))
        });

        let mut outline = levels::assign_levels(&candidates, &self.config);

        if let Some(entry) = entry {
            if let Some(offset) = entry.page_offset {
                for item in &mut outline {
                    item.page = offset_page(item.page, offset);
                }
            }
            merge_forced_headings(&mut outline, &entry.forced_headings);
        }

        log::info!(
            "extracted {:?}: {} candidates, {} outline entries",
            doc.stem,
            candidates.len(),
            outline.len()
        );

        DocumentOutline { title, outline }
    }

    /// Extract the outline by pulling pages from a fallible span source.
    ///
    /// A source failure on any page aborts this document (and only this
    /// document); batch callers catch the error, log, and move on. A source
    /// that tags a span with a page index outside its own page range is
    /// rejected the same way.
    pub fn extract_from_source<S: SpanSource>(&self, source: &S) -> Result<DocumentOutline> {
        let page_count = source.page_count();
        let mut pages = Vec::with_capacity(page_count);
        for number in 1..=page_count {
            let spans = source.page_spans(number)?;
            if let Some(stray) = spans.iter().find(|s| s.page == 0 || s.page > page_count) {
                return Err(Error::PageOutOfRange {
                    found: stray.page,
                    pages: page_count,
                });
            }
            pages.push(Page::new(number, spans));
        }
        let doc = Document::new(source.stem(), pages);
        Ok(self.extract(&doc))
    }
}

/// Insert forced headings in page order, skipping texts already present.
///
/// Forced pages are taken as already being in the caller's output
/// convention; the document page offset is not applied to them.
fn merge_forced_headings(outline: &mut Vec<OutlineEntry>, forced: &[OutlineEntry]) {
    for heading in forced {
        let duplicate = outline
            .iter()
            .any(|e| e.text.to_lowercase() == heading.text.to_lowercase());
        if duplicate {
            continue;
        }
        let position = outline
            .iter()
            .position(|e| e.page > heading.page)
            .unwrap_or(outline.len());
        outline.insert(position, heading.clone());
    }
}
