//! Duplicate suppression for heading candidates.
//!
//! Two tiers: page-local suppression catches the same text reported twice on
//! one page (layout artifacts, overlapping spans), document-global
//! suppression catches the same heading reappearing across pages (running
//! headers and footers). Both compare lowercased exact text.
//!
//! A `SeenHeadings` is constructed fresh for every document extraction and
//! passed into the detector; nothing outlives the extraction call, so
//! processing documents concurrently needs no synchronization.

use std::collections::HashSet;

/// Document-scoped record of accepted heading texts.
#[derive(Debug, Default)]
pub struct SeenHeadings {
    page: HashSet<String>,
    document: HashSet<String>,
}

impl SeenHeadings {
    /// Create an empty seen-set for one document extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the page-local tier. Call when detection moves to a new page.
    pub fn begin_page(&mut self) {
        self.page.clear();
    }

    /// Register a heading text. Returns `true` if it was unseen at both the
    /// page and document tiers (and is now registered at both), `false` if it
    /// is a duplicate at either tier.
    pub fn insert(&mut self, text: &str) -> bool {
        let key = text.trim().to_lowercase();
        if self.page.contains(&key) || self.document.contains(&key) {
            return false;
        }
        self.page.insert(key.clone());
        self.document.insert(key);
        true
    }

    /// Number of distinct headings accepted so far in this document.
    pub fn len(&self) -> usize {
        self.document.len()
    }

    /// Whether no heading has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}
