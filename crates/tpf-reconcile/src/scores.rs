//! Filename-keyed lookup over the two score caches.

use std::collections::HashMap;
use tpf_scan::cache::{ContentScoreRow, StyleScoreRow};

/// Both caches indexed by PDF filename. A filename that repeats keeps its last row.
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    content: HashMap<String, ContentScoreRow>,
    style: HashMap<String, StyleScoreRow>,
    min_timeline_hits: u64,
}

impl ScoreIndex {
    #[must_use]
    pub fn new(
        content_rows: Vec<ContentScoreRow>,
        style_rows: Vec<StyleScoreRow>,
        min_timeline_hits: u64,
    ) -> Self {
        Self {
            content: content_rows
                .into_iter()
                .map(|row| (row.filename.clone(), row))
                .collect(),
            style: style_rows
                .into_iter()
                .map(|row| (row.filename.clone(), row))
                .collect(),
            min_timeline_hits,
        }
    }

    #[must_use]
    pub fn content(&self, filename: &str) -> Option<&ContentScoreRow> {
        self.content.get(filename)
    }

    #[must_use]
    pub fn style(&self, filename: &str) -> Option<&StyleScoreRow> {
        self.style.get(filename)
    }

    /// The content row only if it has enough evidence for the timeline.
    #[must_use]
    pub fn timeline_score(&self, filename: &str) -> Option<&ContentScoreRow> {
        self.content(filename)
            .filter(|row| row.evidence() >= self.min_timeline_hits)
    }

    /// Content rows below the timeline gate.
    #[must_use]
    pub fn below_gate(&self) -> usize {
        self.content
            .values()
            .filter(|row| row.evidence() < self.min_timeline_hits)
            .count()
    }

    #[must_use]
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn style_len(&self) -> usize {
        self.style.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(filename: &str, npv: u64, eps: u64) -> ContentScoreRow {
        ContentScoreRow {
            filename: filename.into(),
            path: String::new(),
            author: String::new(),
            title: String::new(),
            year: 0,
            npv_hits: npv,
            eps_hits: eps,
            score: 0.0,
            top_npv_terms: String::new(),
            top_eps_terms: String::new(),
        }
    }

    #[test]
    fn timeline_gate_is_inclusive() {
        let index = ScoreIndex::new(
            vec![content("a.pdf", 10, 10), content("b.pdf", 10, 9)],
            vec![],
            20,
        );
        assert!(index.timeline_score("a.pdf").is_some());
        assert!(index.timeline_score("b.pdf").is_none());
        assert!(index.content("b.pdf").is_some());
        assert_eq!(index.below_gate(), 1);
    }

    #[test]
    fn later_rows_win() {
        let index = ScoreIndex::new(
            vec![content("a.pdf", 1, 0), content("a.pdf", 30, 0)],
            vec![],
            20,
        );
        assert_eq!(index.content_len(), 1);
        assert_eq!(index.content("a.pdf").unwrap().npv_hits, 30);
    }
}
