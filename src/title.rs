//! Document title selection.
//!
//! Scans page 1 only: the most visually prominent text near the top of the
//! first page seeds the title, and nearby lines at the same size are joined
//! for multi-line titles. Generator artifacts ("Microsoft Word - …") are
//! stripped first, since converted documents often carry the source filename
//! as their largest first-page text. When nothing qualifies, the filename
//! stem is the title.

use crate::config::OutlineConfig;
use crate::rules;
use crate::span::Document;
use crate::utils::safe_float_cmp;

#[derive(Debug, Clone)]
struct TitleCandidate {
    text: String,
    font_size: f32,
    y: f32,
}

/// Remove document-generator artifacts from a would-be title.
///
/// # Examples
///
/// ```
/// use doc_outline::title::strip_generator_artifacts;
///
/// assert_eq!(
///     strip_generator_artifacts("Microsoft Word - Annual Report 2024"),
///     "Annual Report 2024"
/// );
/// assert_eq!(
///     strip_generator_artifacts("Annual Report - final.doc"),
///     "Annual Report"
/// );
/// ```
pub fn strip_generator_artifacts(text: &str) -> String {
    let mut text = text.trim().to_string();
    let lower = text.to_lowercase();

    if lower.ends_with(".doc") && text.contains('-') {
        if let Some(idx) = text.rfind('-') {
            text = text[..idx].trim().to_string();
        }
    }

    let lower = text.to_lowercase();
    for prefix in ["microsoft word -", "adobe acrobat -"] {
        if lower.starts_with(prefix) {
            text = text[prefix.len()..].trim().to_string();
            break;
        }
    }

    text
}

fn is_title_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    if lower.starts_with("untitled") || lower.starts_with("document") {
        return false;
    }
    if text.split_whitespace().count() < 2 || text.len() < 8 {
        return false;
    }
    if rules::is_date_or_page_number(text) {
        return false;
    }
    if text.ends_with('–') || text.ends_with('-') {
        return false;
    }
    true
}

/// Select the document title from the first page.
///
/// `dominant` is page 1's dominant font size. Falls back to the normalized
/// filename stem when no span qualifies.
pub fn select_title(doc: &Document, dominant: f32, config: &OutlineConfig) -> String {
    let page = match doc.pages.first() {
        Some(page) => page,
        None => return fallback_title(&doc.stem),
    };

    let mut candidates: Vec<TitleCandidate> = Vec::new();
    for span in &page.spans {
        let text = strip_generator_artifacts(&span.text);
        if text.is_empty() || !is_title_text(&text) {
            continue;
        }

        let prominent = span.font_size > dominant * config.title_size_ratio
            || (span.bold && span.font_size > dominant * config.title_bold_ratio);
        if prominent && span.y < config.title_band {
            candidates.push(TitleCandidate {
                text,
                font_size: span.font_size,
                y: span.y,
            });
        }
    }

    if candidates.is_empty() {
        log::debug!("no title candidate on page 1, falling back to stem {:?}", doc.stem);
        return fallback_title(&doc.stem);
    }

    // Most prominent first: largest size, then nearest the top.
    candidates.sort_by(|a, b| {
        safe_float_cmp(b.font_size, a.font_size).then(safe_float_cmp(a.y, b.y))
    });
    let seed = candidates[0].clone();

    // Join continuation lines below the seed: same size band, small vertical
    // gaps. The first large gap ends the title block.
    let mut below: Vec<&TitleCandidate> = candidates
        .iter()
        .filter(|c| {
            c.y > seed.y && (c.font_size - seed.font_size).abs() <= config.title_size_tolerance
        })
        .collect();
    below.sort_by(|a, b| safe_float_cmp(a.y, b.y));

    let mut title = seed.text.clone();
    let mut last_y = seed.y;
    for line in below {
        if line.y - last_y > config.title_join_gap {
            break;
        }
        title.push(' ');
        title.push_str(&line.text);
        last_y = line.y;
    }

    let title = rules::normalize_whitespace(&title);
    let title = title.trim_end_matches(['–', '-']).trim().to_string();
    if title.is_empty() {
        fallback_title(&doc.stem)
    } else {
        title
    }
}

/// Normalize a filename stem for use as a title.
fn fallback_title(stem: &str) -> String {
    rules::normalize_whitespace(&stem.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{Page, TextSpan};

    fn doc(spans: Vec<TextSpan>) -> Document {
        Document::new("fallback_stem", vec![Page::new(1, spans)])
    }

    #[test]
    fn test_most_prominent_span_wins() {
        let d = doc(vec![
            TextSpan::new("Quarterly Performance Review", 22.0, true, 1, 60.0, 80.0),
            TextSpan::new("Prepared by Finance", 12.0, false, 1, 60.0, 120.0),
            TextSpan::new("Body text follows below here", 10.0, false, 1, 60.0, 300.0),
        ]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Quarterly Performance Review");
    }

    #[test]
    fn test_multi_line_title_joined() {
        let d = doc(vec![
            TextSpan::new("Overview of the Foundation", 20.0, true, 1, 60.0, 70.0),
            TextSpan::new("Level Extension Programme", 20.0, true, 1, 60.0, 95.0),
            TextSpan::new("Version 2.1 details inside", 10.0, false, 1, 60.0, 400.0),
        ]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Overview of the Foundation Level Extension Programme");
    }

    #[test]
    fn test_large_gap_terminates_title() {
        let d = doc(vec![
            TextSpan::new("Main Report Title Here", 20.0, true, 1, 60.0, 50.0),
            // Same size, but 100pt below: a separate display element.
            TextSpan::new("Unrelated Banner Text", 20.0, true, 1, 60.0, 150.0),
        ]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Main Report Title Here");
    }

    #[test]
    fn test_generator_artifacts_stripped() {
        let d = doc(vec![TextSpan::new(
            "Microsoft Word - Strategic Plan 2025",
            20.0,
            false,
            1,
            60.0,
            60.0,
        )]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Strategic Plan 2025");
    }

    #[test]
    fn test_placeholders_and_dates_skipped() {
        let d = doc(vec![
            TextSpan::new("Untitled document draft", 24.0, true, 1, 60.0, 40.0),
            TextSpan::new("March 18, 2003", 20.0, true, 1, 60.0, 80.0),
            TextSpan::new("Actual Report Title", 18.0, true, 1, 60.0, 110.0),
        ]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Actual Report Title");
    }

    #[test]
    fn test_spans_below_band_ignored() {
        let d = doc(vec![TextSpan::new(
            "Prominent Footer Stamp",
            24.0,
            true,
            1,
            60.0,
            700.0,
        )]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "fallback stem");
    }

    #[test]
    fn test_fallback_normalizes_stem() {
        let d = Document::new("annual_report_2024", vec![Page::new(1, vec![])]);
        let title = select_title(&d, 0.0, &OutlineConfig::default());
        assert_eq!(title, "annual report 2024");
    }

    #[test]
    fn test_empty_document_falls_back() {
        let d = Document::new("empty_doc", vec![]);
        let title = select_title(&d, 0.0, &OutlineConfig::default());
        assert_eq!(title, "empty doc");
    }

    #[test]
    fn test_bold_with_smaller_ratio_qualifies() {
        // 12.5 is under 10 * 1.3 but bold and over 10 * 1.2.
        let d = doc(vec![TextSpan::new(
            "Moderately Sized Bold Title",
            12.5,
            true,
            1,
            60.0,
            60.0,
        )]);
        let title = select_title(&d, 10.0, &OutlineConfig::default());
        assert_eq!(title, "Moderately Sized Bold Title");
    }
}
