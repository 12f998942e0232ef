//! Heading candidate detection.
//!
//! Every span on every page passes through a shape filter and then an ordered
//! rule chain. The chain is a prioritized list of independent predicates, not
//! a nested conditional: each rule either tags the span with a
//! [`HeadingSignal`] or passes, and the first match wins. This keeps the
//! rules individually testable and their priority explicit.

use crate::config::OutlineConfig;
use crate::dedup::SeenHeadings;
use crate::rules;
use crate::span::Page;

/// The rule that admitted a span as a heading candidate.
///
/// Carried through to level assignment: a `NumberedSection` signal levels
/// purely by its depth, while the other signals level by font-size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSignal {
    /// Numbered section prefix ("2.", "2.3", "2.3.1"); depth = segment count
    NumberedSection {
        /// Number of dot-separated prefix segments
        depth: usize,
    },
    /// Matches the structural keyword vocabulary
    Keyword,
    /// Font size well above the page's dominant size, plus bold or uppercase
    SizeEmphasis,
    /// Fully uppercase at roughly body size or above
    Uppercase,
}

/// A span that passed the shape filter and matched a heading rule.
///
/// Document ordering key is `(page, y, x)` ascending: top-to-bottom,
/// left-to-right reading order.
#[derive(Debug, Clone)]
pub struct HeadingCandidate {
    /// Trimmed span text
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Whether the span is bold
    pub bold: bool,
    /// 1-based page index of the originating span
    pub page: usize,
    /// Top edge of the originating span
    pub y: f32,
    /// Left edge of the originating span
    pub x: f32,
    /// The rule that admitted this candidate
    pub signal: HeadingSignal,
}

/// Everything a detection rule may look at for one span.
#[derive(Debug, Clone, Copy)]
struct RuleContext<'a> {
    text: &'a str,
    font_size: f32,
    bold: bool,
    dominant: f32,
    config: &'a OutlineConfig,
}

type Rule = fn(&RuleContext<'_>) -> Option<HeadingSignal>;

/// Detection rules in priority order; the first match wins.
const RULES: &[Rule] = &[
    numbered_section_rule,
    keyword_rule,
    size_emphasis_rule,
    uppercase_rule,
];

fn numbered_section_rule(ctx: &RuleContext<'_>) -> Option<HeadingSignal> {
    rules::numeric_prefix_depth(ctx.text).map(|depth| HeadingSignal::NumberedSection { depth })
}

fn keyword_rule(ctx: &RuleContext<'_>) -> Option<HeadingSignal> {
    rules::is_keyword_heading(ctx.text).then_some(HeadingSignal::Keyword)
}

fn size_emphasis_rule(ctx: &RuleContext<'_>) -> Option<HeadingSignal> {
    let emphasized = ctx.bold || rules::is_all_uppercase(ctx.text);
    (ctx.font_size >= ctx.dominant * ctx.config.heading_size_ratio && emphasized)
        .then_some(HeadingSignal::SizeEmphasis)
}

fn uppercase_rule(ctx: &RuleContext<'_>) -> Option<HeadingSignal> {
    (rules::is_all_uppercase(ctx.text) && ctx.font_size >= ctx.dominant * ctx.config.uppercase_ratio)
        .then_some(HeadingSignal::Uppercase)
}

/// Run the rule chain over one already shape-filtered text.
fn classify(ctx: &RuleContext<'_>) -> Option<HeadingSignal> {
    RULES.iter().find_map(|rule| rule(ctx))
}

/// Extract heading candidates from a single page.
///
/// `dominant` is the page's dominant font size from the
/// [`crate::profile::FontProfile`]. `seen` is the document-scoped dedup
/// context; its page tier is reset here, so callers just feed pages in order.
pub fn detect_page(
    page: &Page,
    dominant: f32,
    config: &OutlineConfig,
    seen: &mut SeenHeadings,
) -> Vec<HeadingCandidate> {
    let mut candidates = Vec::new();
    seen.begin_page();

    for span in &page.spans {
        let text = span.text.trim();
        if !rules::is_plausible_heading_text(text, config.min_heading_len, config.max_heading_words) {
            continue;
        }

        let ctx = RuleContext {
            text,
            font_size: span.font_size,
            bold: span.bold,
            dominant,
            config,
        };
        let signal = match classify(&ctx) {
            Some(signal) => signal,
            None => continue,
        };

        if !seen.insert(text) {
            log::debug!("page {}: suppressed duplicate heading {:?}", page.number, text);
            continue;
        }

        log::debug!(
            "page {}: heading candidate {:?} via {:?} (size {}, dominant {})",
            page.number,
            text,
            signal,
            span.font_size,
            dominant
        );
        candidates.push(HeadingCandidate {
            text: text.to_string(),
            font_size: span.font_size,
            bold: span.bold,
            page: page.number,
            y: span.y,
            x: span.x,
            signal,
        });
    }

    candidates
}
