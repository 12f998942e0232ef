//! Level assignment for deduplicated heading candidates.
//!
//! Numbered sections level purely by their prefix depth. Everything else
//! levels by font-size tiers derived from the candidate population itself,
//! with bold and keyword fallbacks for documents whose headings share one
//! size with the body text. The minimum-size floor is enforced last and can
//! reject a candidate the detector accepted.

use crate::config::OutlineConfig;
use crate::detector::{HeadingCandidate, HeadingSignal};
use crate::outline::{HeadingLevel, OutlineEntry};
use crate::rules;

/// H1/H2/H3 size thresholds derived from the candidate population.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FontTiers {
    h1: f32,
    h2: f32,
    h3: f32,
}

/// Derive the three size tiers from the distinct candidate font sizes.
///
/// Distinct sizes (1pt-distinct, descending) map largest → H1 threshold,
/// second → H2, third → H3. Missing tiers shrink from the next-higher tier
/// by `tier_shrink`; every tier is floored at `min_heading_size`.
fn derive_tiers(candidates: &[HeadingCandidate], config: &OutlineConfig) -> FontTiers {
    let mut sizes: Vec<f32> = candidates.iter().map(|c| c.font_size).collect();
    sizes.sort_by(|a, b| crate::utils::safe_float_cmp(*b, *a));
    sizes.dedup_by(|a, b| (*a - *b).abs() < 1.0);

    let floor = config.min_heading_size;
    let h1 = sizes.first().copied().unwrap_or(floor).max(floor);
    let h2 = sizes.get(1).copied().unwrap_or(h1 * config.tier_shrink).max(floor);
    let h3 = sizes.get(2).copied().unwrap_or(h2 * config.tier_shrink).max(floor);

    FontTiers { h1, h2, h3 }
}

/// Level a single candidate, or reject it.
fn level_for(candidate: &HeadingCandidate, tiers: FontTiers, config: &OutlineConfig) -> Option<HeadingLevel> {
    // The floor binds every path, numeric included: nothing below it is a
    // heading, whatever signal admitted it.
    if candidate.font_size < config.min_heading_size {
        log::debug!(
            "dropping {:?}: size {} under floor {}",
            candidate.text,
            candidate.font_size,
            config.min_heading_size
        );
        return None;
    }

    if let HeadingSignal::NumberedSection { depth } = candidate.signal {
        return Some(HeadingLevel::from_numeric_depth(depth));
    }

    let tol = config.tier_tolerance;
    if candidate.font_size >= tiers.h1 - tol {
        return Some(HeadingLevel::H1);
    }
    if candidate.font_size >= tiers.h2 - tol {
        return Some(HeadingLevel::H2);
    }
    if candidate.font_size >= tiers.h3 - tol {
        return Some(HeadingLevel::H3);
    }

    if candidate.bold {
        return Some(HeadingLevel::H3);
    }

    if rules::is_keyword_heading(&candidate.text) {
        return Some(if rules::is_major_keyword(&candidate.text) {
            HeadingLevel::H1
        } else {
            HeadingLevel::H2
        });
    }

    None
}

/// Convert the ordered candidate list into leveled outline entries.
///
/// `candidates` must already be sorted by `(page, y, x)`; output order is
/// input order, no re-sorting happens after leveling.
pub fn assign_levels(candidates: &[HeadingCandidate], config: &OutlineConfig) -> Vec<OutlineEntry> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let tiers = derive_tiers(candidates, config);
    log::debug!("font tiers: {:?}", tiers);

    candidates
        .iter()
        .filter_map(|candidate| {
            debug_assert!(
                !candidate.text.trim().is_empty(),
                "detector must not emit empty candidates"
            );
            level_for(candidate, tiers, config).map(|level| OutlineEntry {
                level,
                text: candidate.text.trim().to_string(),
                page: candidate.page,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str, size: f32, bold: bool, signal: HeadingSignal) -> HeadingCandidate {
        HeadingCandidate {
            text: text.to_string(),
            font_size: size,
            bold,
            page: 1,
            y: 0.0,
            x: 0.0,
            signal,
        }
    }

    #[test]
    fn test_numeric_depth_overrides_font_size() {
        let config = OutlineConfig::default();
        // A tiny-font "3.2.1" heading and a huge-font "4." heading: levels
        // come from depth alone.
        let candidates = vec![
            candidate("3.2.1 Details", 10.5, false, HeadingSignal::NumberedSection { depth: 3 }),
            candidate("4. Discussion", 24.0, true, HeadingSignal::NumberedSection { depth: 1 }),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[0].level, HeadingLevel::H3);
        assert_eq!(outline[1].level, HeadingLevel::H1);
    }

    #[test]
    fn test_three_distinct_sizes_map_to_three_tiers() {
        let config = OutlineConfig::default();
        let candidates = vec![
            candidate("Biggest Heading", 18.0, true, HeadingSignal::SizeEmphasis),
            candidate("Middle Heading", 14.0, true, HeadingSignal::SizeEmphasis),
            candidate("Smallest Heading", 11.0, true, HeadingSignal::SizeEmphasis),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[0].level, HeadingLevel::H1);
        assert_eq!(outline[1].level, HeadingLevel::H2);
        assert_eq!(outline[2].level, HeadingLevel::H3);
    }

    #[test]
    fn test_single_size_population_is_h1() {
        let config = OutlineConfig::default();
        let candidates = vec![candidate("Only Heading", 16.0, true, HeadingSignal::SizeEmphasis)];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[0].level, HeadingLevel::H1);
    }

    #[test]
    fn test_floor_rejects_even_numeric_and_keyword() {
        let config = OutlineConfig::default(); // floor 10.0
        let candidates = vec![
            candidate("1. Tiny Section", 8.0, true, HeadingSignal::NumberedSection { depth: 1 }),
            candidate("References", 9.0, false, HeadingSignal::Keyword),
            candidate("Real Heading", 14.0, true, HeadingSignal::SizeEmphasis),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].text, "Real Heading");
    }

    #[test]
    fn test_keyword_fallback_levels() {
        let config = OutlineConfig::default();
        // Keyword headings at body size, far below the big display heading:
        // they miss every tier and fall through to the keyword mapping.
        let candidates = vec![
            candidate("Giant Display Heading", 30.0, true, HeadingSignal::SizeEmphasis),
            candidate("Second Tier Heading", 24.0, true, HeadingSignal::SizeEmphasis),
            candidate("Third Tier Heading", 19.0, true, HeadingSignal::SizeEmphasis),
            candidate("References", 10.0, false, HeadingSignal::Keyword),
            candidate("Methodology", 10.0, false, HeadingSignal::Keyword),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[3].text, "References");
        assert_eq!(outline[3].level, HeadingLevel::H1);
        assert_eq!(outline[4].text, "Methodology");
        assert_eq!(outline[4].level, HeadingLevel::H2);
    }

    #[test]
    fn test_bold_fallback_is_h3() {
        let config = OutlineConfig::default();
        let candidates = vec![
            candidate("Giant Display Heading", 30.0, true, HeadingSignal::SizeEmphasis),
            candidate("Second Tier Heading", 24.0, true, HeadingSignal::SizeEmphasis),
            candidate("Third Tier Heading", 19.0, true, HeadingSignal::SizeEmphasis),
            candidate("Bold Body Size Heading", 10.0, true, HeadingSignal::SizeEmphasis),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[3].level, HeadingLevel::H3);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let config = OutlineConfig::default();
        let candidates = vec![
            candidate("Small First Heading", 11.0, true, HeadingSignal::SizeEmphasis),
            candidate("Large Second Heading", 18.0, true, HeadingSignal::SizeEmphasis),
        ];
        let outline = assign_levels(&candidates, &config);
        assert_eq!(outline[0].text, "Small First Heading");
        assert_eq!(outline[1].text, "Large Second Heading");
    }

    #[test]
    fn test_empty_input() {
        let config = OutlineConfig::default();
        assert!(assign_levels(&[], &config).is_empty());
    }
}
