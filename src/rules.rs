//! Text-shape rules shared by title selection and heading detection.
//!
//! These are the vocabulary and pattern checks that decide whether a piece of
//! text even looks like a heading: dates, page numbers, URL fragments,
//! sentence-shaped runs, numbered section prefixes, and the fixed list of
//! structural keywords that documents use for unnumbered sections.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date shapes commonly found in headers and footers.
    static ref RE_DATE_NUMERIC: Regex = Regex::new(r"(?i)^\d{1,2}[-/]\d{1,2}[-/]\d{2,4}$").unwrap();
    static ref RE_DATE_YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
    static ref RE_DATE_MONTH_FIRST: Regex = Regex::new(
        r"(?i)^(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4}$"
    )
    .unwrap();
    static ref RE_DATE_DAY_FIRST: Regex = Regex::new(
        r"(?i)^\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}$"
    )
    .unwrap();
    // "Page 12", "p. 12", "P 12"
    static ref RE_PAGE_NUMBER: Regex = Regex::new(r"(?i)^(page|p\.?)\s*\d+$").unwrap();
    // "1 ", "1. ", "2.3 ", "2.3.1 " followed by the heading text.
    static ref RE_NUMERIC_PREFIX: Regex = Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+(.+)$").unwrap();
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Structural keywords that mark unnumbered section headings.
///
/// Matching is case-insensitive, on the whole text or as a `keyword + space`
/// prefix ("Appendix A: Data Tables" matches "appendix").
pub const STRUCTURAL_KEYWORDS: &[&str] = &[
    "revision history",
    "table of contents",
    "acknowledgements",
    "acknowledgments",
    "introduction",
    "overview",
    "summary",
    "conclusion",
    "references",
    "appendix",
    "glossary",
    "index",
    "chapter",
    "section",
    "part",
    "preamble",
    "abstract",
    "background",
    "methodology",
    "results",
    "discussion",
    "bibliography",
    "contents",
    "foreword",
    "preface",
    "executive summary",
];

/// Subset of [`STRUCTURAL_KEYWORDS`] that name top-level document divisions.
///
/// Keyword headings matching one of these level to H1; the rest level to H2.
pub const MAJOR_KEYWORDS: &[&str] = &[
    "revision history",
    "table of contents",
    "acknowledgements",
    "acknowledgments",
    "references",
    "appendix",
    "abstract",
    "executive summary",
    "conclusion",
    "introduction",
    "overview",
    "summary",
];

/// Leading words that mark running prose rather than a heading.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Fragments that mark boilerplate: URLs, classification stamps, file names.
const BOILERPLATE_FRAGMENTS: &[&str] = &["http", ".com", ".org", "www.", "filename", "confidential"];

/// Collapse internal whitespace runs and trim.
pub fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Check whether text is a date, a bare number, or a page-number token.
pub fn is_date_or_page_number(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    if RE_DATE_NUMERIC.is_match(text)
        || RE_DATE_YEAR.is_match(text)
        || RE_DATE_MONTH_FIRST.is_match(text)
        || RE_DATE_DAY_FIRST.is_match(text)
        || RE_PAGE_NUMBER.is_match(text)
    {
        return true;
    }
    // Bare numerals, possibly dotted ("3.1.4") or spaced ("12 7").
    let stripped: String = text.chars().filter(|c| *c != '.' && *c != ' ').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Depth of a numbered section prefix, if the text carries one.
///
/// `"3 Results"` has depth 1, `"3.2 Data"` depth 2, `"3.2.1 Units"` depth 3.
/// The text after the prefix must be longer than 3 characters, so a stray
/// "2.1 m" measurement does not register as a section.
///
/// # Examples
///
/// ```
/// use doc_outline::rules::numeric_prefix_depth;
///
/// assert_eq!(numeric_prefix_depth("1. Introduction"), Some(1));
/// assert_eq!(numeric_prefix_depth("2.3 Sampling Frame"), Some(2));
/// assert_eq!(numeric_prefix_depth("2.3.1 Exclusions"), Some(3));
/// assert_eq!(numeric_prefix_depth("Introduction"), None);
/// assert_eq!(numeric_prefix_depth("2.1 m"), None);
/// ```
pub fn numeric_prefix_depth(text: &str) -> Option<usize> {
    let caps = RE_NUMERIC_PREFIX.captures(text.trim())?;
    let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
    if rest.len() <= 3 {
        return None;
    }
    Some(caps[1].split('.').count())
}

/// Check whether normalized text matches the structural keyword vocabulary.
pub fn is_keyword_heading(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    STRUCTURAL_KEYWORDS
        .iter()
        .any(|kw| lower == *kw || lower.starts_with(&format!("{kw} ")))
}

/// Check whether a keyword heading belongs to the major (H1) subset.
pub fn is_major_keyword(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    MAJOR_KEYWORDS
        .iter()
        .any(|kw| lower == *kw || lower.starts_with(kw))
}

/// Check whether text is fully uppercase (ignoring digits and punctuation).
pub fn is_all_uppercase(text: &str) -> bool {
    let mut saw_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            saw_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    saw_alpha
}

/// Shape filter applied to every span before any heading rule runs.
///
/// Rejects spans that cannot be headings no matter their typography: too
/// short, too long, date/page-number shaped, boilerplate, trailing
/// punctuation that marks a continuation, lowercase starts, and
/// sentence-shaped word runs.
pub fn is_plausible_heading_text(text: &str, min_len: usize, max_words: usize) -> bool {
    let text = text.trim();
    if text.len() < min_len {
        return false;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        return false;
    }

    if is_date_or_page_number(text) {
        return false;
    }

    let lower = text.to_lowercase();
    if BOILERPLATE_FRAGMENTS.iter().any(|frag| lower.contains(frag)) {
        return false;
    }

    if text.ends_with('–') || text.ends_with('-') || text.ends_with(',') {
        return false;
    }

    let first = match text.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_uppercase() && !first.is_ascii_digit() {
        return false;
    }

    // A long run of lowercase words is a sentence fragment, not a heading.
    // Words without any alphabetic char (years, figures) are neither case.
    if words.len() > 3 {
        let lowercase_count = words[1..]
            .iter()
            .filter(|w| {
                w.len() > 2
                    && w.chars().any(char::is_alphabetic)
                    && w.chars().all(|c| !c.is_alphabetic() || c.is_lowercase())
            })
            .count();
        if lowercase_count as f32 > words.len() as f32 * 0.6 {
            return false;
        }
    }

    if let Some(first_word) = words.first() {
        if SENTENCE_STARTERS.contains(&first_word.to_lowercase().as_str()) {
            return false;
        }
    }

    true
}
