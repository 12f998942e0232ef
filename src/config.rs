//! Configuration for outline extraction.
//!
//! All font-size thresholds are ratios against a page's own dominant font
//! size, never absolute point values, so the heuristics self-calibrate across
//! documents with different typographic conventions. The one absolute value,
//! `min_heading_size`, is the floor below which nothing is treated as a
//! heading.

/// Outline extraction configuration.
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    /// A non-bold title candidate must exceed `dominant * title_size_ratio`.
    pub title_size_ratio: f32,

    /// A bold title candidate must exceed `dominant * title_bold_ratio`.
    pub title_bold_ratio: f32,

    /// Vertical band (from the top of page 1) inside which title candidates
    /// are considered.
    pub title_band: f32,

    /// Maximum vertical gap between title lines that are joined into a
    /// multi-line title.
    pub title_join_gap: f32,

    /// Maximum font-size difference between joined title lines, in points.
    pub title_size_tolerance: f32,

    /// Minimum heading text length, in characters.
    pub min_heading_len: usize,

    /// Maximum heading length, in words.
    pub max_heading_words: usize,

    /// A bold or uppercase heading candidate must reach
    /// `dominant * heading_size_ratio`.
    pub heading_size_ratio: f32,

    /// A fully uppercase candidate may sit slightly below the dominant size:
    /// it must reach `dominant * uppercase_ratio`.
    pub uppercase_ratio: f32,

    /// Absolute font-size floor; candidates below it are discarded during
    /// level assignment regardless of how they were detected.
    pub min_heading_size: f32,

    /// Ratio by which a missing font tier is synthesized from the next-higher
    /// tier when fewer than three distinct candidate sizes exist.
    pub tier_shrink: f32,

    /// Tolerance when matching a candidate's size against a tier threshold,
    /// in points.
    pub tier_tolerance: f32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineConfig {
    /// Create a configuration with defaults tuned on mixed report/paper
    /// corpora.
    pub fn new() -> Self {
        Self {
            title_size_ratio: 1.3,
            title_bold_ratio: 1.2,
            title_band: 200.0,
            title_join_gap: 40.0,
            title_size_tolerance: 1.0,
            min_heading_len: 4,
            max_heading_words: 25,
            heading_size_ratio: 1.1,
            uppercase_ratio: 0.9,
            min_heading_size: 10.0,
            tier_shrink: 0.85,
            tier_tolerance: 0.5,
        }
    }

    /// Set the vertical band for title candidates.
    pub fn with_title_band(mut self, band: f32) -> Self {
        self.title_band = band;
        self
    }

    /// Set the font-size ratio a heading candidate must reach.
    pub fn with_heading_size_ratio(mut self, ratio: f32) -> Self {
        self.heading_size_ratio = ratio;
        self
    }

    /// Set the absolute heading font-size floor.
    pub fn with_min_heading_size(mut self, size: f32) -> Self {
        self.min_heading_size = size;
        self
    }

    /// Set the maximum heading length in words.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }
}
