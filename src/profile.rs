//! Per-page dominant font size.
//!
//! On ordinary pages body text dominates the span count, so the mode of the
//! span font sizes is a robust, parameter-free proxy for "normal text size".
//! Every later threshold is a ratio against this value, which makes the
//! pipeline self-calibrating per page.

use std::collections::HashMap;

use crate::span::Page;

/// Bucket a font size to 0.01pt so f32 values can key a count map.
fn size_key(size: f32) -> i64 {
    (size * 100.0).round() as i64
}

/// Dominant font sizes for every page of a document.
///
/// Computed once per extraction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FontProfile {
    // Indexed by page number - 1.
    dominant: Vec<f32>,
}

impl FontProfile {
    /// Compute the profile for a set of pages.
    ///
    /// Pages must be in order; a page with no spans gets a dominant size of
    /// 0.0, which later ratio checks treat as "everything is larger than
    /// body text".
    pub fn compute(pages: &[Page]) -> Self {
        let dominant = pages.iter().map(|p| dominant_size(p)).collect();
        Self { dominant }
    }

    /// Dominant font size for a 1-based page index, or 0.0 for an unknown
    /// page.
    pub fn dominant(&self, page: usize) -> f32 {
        if page == 0 {
            return 0.0;
        }
        self.dominant.get(page - 1).copied().unwrap_or(0.0)
    }
}

/// The most frequent font size among a page's spans (mode by span count).
///
/// Ties resolve to the smaller size: when a page splits evenly between two
/// sizes, the smaller one is more likely the body text.
///
/// # Examples
///
/// ```
/// use doc_outline::span::{Page, TextSpan};
/// use doc_outline::profile::dominant_size;
///
/// let page = Page::new(1, vec![
///     TextSpan::new("body", 10.0, false, 1, 0.0, 100.0),
///     TextSpan::new("more body", 10.0, false, 1, 0.0, 120.0),
///     TextSpan::new("Heading", 16.0, true, 1, 0.0, 50.0),
/// ]);
/// assert_eq!(dominant_size(&page), 10.0);
/// ```
pub fn dominant_size(page: &Page) -> f32 {
    if page.spans.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for span in &page.spans {
        *counts.entry(size_key(span.font_size)).or_insert(0) += 1;
    }

    let (key, _) = counts
        .into_iter()
        .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(kb.cmp(ka)))
        .expect("non-empty page has at least one size bucket");

    key as f32 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::TextSpan;

    fn span(size: f32) -> TextSpan {
        TextSpan::new("x", size, false, 1, 0.0, 0.0)
    }

    #[test]
    fn test_empty_page_is_zero() {
        let page = Page::new(1, vec![]);
        assert_eq!(dominant_size(&page), 0.0);
    }

    #[test]
    fn test_mode_by_span_count() {
        let page = Page::new(
            1,
            vec![span(10.0), span(10.0), span(10.0), span(14.0), span(18.0)],
        );
        assert_eq!(dominant_size(&page), 10.0);
    }

    #[test]
    fn test_tie_prefers_smaller_size() {
        let page = Page::new(1, vec![span(10.0), span(12.0), span(12.0), span(10.0)]);
        assert_eq!(dominant_size(&page), 10.0);
    }

    #[test]
    fn test_nearby_sizes_stay_distinct() {
        // 10.0 and 10.5 are different buckets; neither absorbs the other.
        let page = Page::new(1, vec![span(10.0), span(10.5), span(10.5)]);
        assert_eq!(dominant_size(&page), 10.5);
    }

    #[test]
    fn test_profile_indexing() {
        let pages = vec![
            Page::new(1, vec![span(10.0)]),
            Page::new(2, vec![span(12.0), span(12.0)]),
        ];
        let profile = FontProfile::compute(&pages);
        assert_eq!(profile.dominant(1), 10.0);
        assert_eq!(profile.dominant(2), 12.0);
        assert_eq!(profile.dominant(3), 0.0);
        assert_eq!(profile.dominant(0), 0.0);
    }
}
