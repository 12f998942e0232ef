//! Externally supplied per-document calibration.
//!
//! Some collections need document-specific corrections: a known title that
//! the heuristics cannot recover, a page-numbering convention offset from the
//! physical page index, or headings the detector misses. Those corrections
//! live here, in a table keyed by document fingerprint and supplied by the
//! caller, never as literals inside the detection or leveling logic.
//!
//! The table is serde-deserializable so callers can ship it as JSON next to
//! their document collection:
//!
//! ```json
//! {
//!   "file02": {
//!     "title": "Overview Foundation Level Extensions",
//!     "page_offset": -1
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::outline::OutlineEntry;

/// Calibration for a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Title to use instead of running the title selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Offset added to every emitted page index (the result is clamped to 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<i64>,

    /// Headings to force into the outline even if the detector misses them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forced_headings: Vec<OutlineEntry>,
}

/// Fingerprint-keyed table of per-document overrides.
///
/// The fingerprint is whatever the caller uses to identify documents; the
/// extractor looks up the document's filename stem by default. An empty table
/// is the common case and costs one map lookup per document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable {
    entries: HashMap<String, OverrideEntry>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register an override for a fingerprint.
    pub fn insert(&mut self, fingerprint: impl Into<String>, entry: OverrideEntry) {
        self.entries.insert(fingerprint.into(), entry);
    }

    /// Look up the override for a fingerprint.
    pub fn get(&self, fingerprint: &str) -> Option<&OverrideEntry> {
        self.entries.get(fingerprint)
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply a page offset, clamping to page 1.
pub(crate) fn offset_page(page: usize, offset: i64) -> usize {
    (page as i64 + offset).max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::HeadingLevel;

    #[test]
    fn test_lookup() {
        let mut table = OverrideTable::new();
        table.insert(
            "file02",
            OverrideEntry {
                title: Some("Overview Foundation Level Extensions".to_string()),
                ..Default::default()
            },
        );

        assert!(table.get("file01").is_none());
        let entry = table.get("file02").unwrap();
        assert_eq!(
            entry.title.as_deref(),
            Some("Overview Foundation Level Extensions")
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "report_a": {
                "page_offset": -1,
                "forced_headings": [
                    { "level": "H1", "text": "Annexes", "page": 12 }
                ]
            }
        }"#;
        let table = OverrideTable::from_json(json).unwrap();
        let entry = table.get("report_a").unwrap();
        assert_eq!(entry.page_offset, Some(-1));
        assert_eq!(entry.forced_headings.len(), 1);
        assert_eq!(entry.forced_headings[0].level, HeadingLevel::H1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(OverrideTable::from_json("not json").is_err());
    }

    #[test]
    fn test_offset_clamps_to_first_page() {
        assert_eq!(offset_page(3, -1), 2);
        assert_eq!(offset_page(1, -4), 1);
        assert_eq!(offset_page(2, 3), 5);
    }
}
