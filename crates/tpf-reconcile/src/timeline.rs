//! Timeline assembly: bibliography points plus research-note overlays.

use tpf_core::Year;
use tpf_core::entities::{ResearchNote, TimelineEntry};
use tpf_core::enums::Paradigm;
use tracing::debug;

use crate::surname::{SurnameIndex, surname};

/// Timeline scores carry three decimals.
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// First `max_chars` characters of `text`, with `...` when cut.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// A bibliography-only point.
#[must_use]
pub fn bibliography_point(
    title: &str,
    author: &str,
    year: Year,
    paradigm: Paradigm,
    score: f64,
) -> TimelineEntry {
    TimelineEntry {
        slug: None,
        title: title.to_string(),
        author: author.to_string(),
        year,
        paradigm,
        score: round_score(score),
        key_finding: String::new(),
        has_note: false,
    }
}

/// How many notes replaced a bibliography point and how many were added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct MergeCounts {
    pub merged: usize,
    pub appended: usize,
}

/// Overlay research notes on the bibliography timeline.
///
/// Each note with a year replaces the first bibliography point of the same
/// year and surname that no earlier note has claimed, inheriting its score and
/// paradigm. Otherwise the note is appended with a score from the exact
/// (surname, year) index and a paradigm from the widened index, then the
/// surname-only index, then the note's own label.
pub fn merge_notes<'a, I>(
    timeline: &mut Vec<TimelineEntry>,
    notes: I,
    index: &SurnameIndex,
    key_finding_chars: usize,
) -> MergeCounts
where
    I: IntoIterator<Item = &'a ResearchNote>,
{
    let mut counts = MergeCounts::default();

    for note in notes {
        let Some(year) = note.year else {
            continue;
        };
        let note_surname = surname(&note.author);

        let matched = if note_surname.is_empty() {
            None
        } else {
            timeline.iter().position(|point| {
                point.year == year && !point.has_note && surname(&point.author) == note_surname
            })
        };

        let (score, paradigm) = match matched {
            Some(i) => (timeline[i].score, timeline[i].paradigm),
            None => (
                round_score(index.score(&note_surname, year).unwrap_or(0.0)),
                index
                    .paradigm_near(&note_surname, year)
                    .or_else(|| index.sole_paradigm(&note_surname))
                    .unwrap_or(note.paradigm),
            ),
        };

        let entry = TimelineEntry {
            slug: Some(note.slug.clone()),
            title: note.title.clone(),
            author: note.author.clone(),
            year,
            paradigm,
            score,
            key_finding: snippet(&note.key_finding, key_finding_chars),
            has_note: true,
        };

        if let Some(i) = matched {
            debug!(slug = %note.slug, replaced = %timeline[i].title, "note merged into timeline");
            timeline[i] = entry;
            counts.merged += 1;
        } else {
            debug!(slug = %note.slug, "note appended to timeline");
            timeline.push(entry);
            counts.appended += 1;
        }
    }
    counts
}

/// Stable sort by year; equal years keep their insertion order.
pub fn sort_by_year(timeline: &mut [TimelineEntry]) {
    timeline.sort_by_key(|entry| entry.year);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(slug: &str, author: &str, year: Option<Year>, paradigm: Paradigm) -> ResearchNote {
        ResearchNote {
            slug: slug.into(),
            filename: format!("{slug}.md"),
            title: slug.into(),
            author: author.into(),
            year,
            sections: vec![],
            key_finding: "Finding.".into(),
            source: String::new(),
            significance: String::new(),
            connections: String::new(),
            details: String::new(),
            paradigm,
        }
    }

    #[test]
    fn snippet_cuts_on_characters() {
        assert_eq!(snippet("short", 200), "short");
        assert_eq!(snippet(&"é".repeat(5), 3), "ééé...");
        assert_eq!(snippet(&"a".repeat(200), 200), "a".repeat(200));
    }

    #[test]
    fn round_to_three_places() {
        assert_eq!(round_score(0.33333), 0.333);
        assert_eq!(round_score(-0.6667), -0.667);
    }

    #[test]
    fn note_replaces_matching_point_and_inherits_its_labels() {
        let mut timeline = vec![bibliography_point(
            "Capital Budgeting",
            "Dean, Joel",
            1951,
            Paradigm::Academic,
            0.41234,
        )];
        let notes = [note("Valuation_Dean1951", "Dean", Some(1951), Paradigm::PreSplit)];
        let counts = merge_notes(&mut timeline, &notes, &SurnameIndex::default(), 200);

        assert_eq!(counts, MergeCounts { merged: 1, appended: 0 });
        assert_eq!(timeline.len(), 1);
        assert!(timeline[0].has_note);
        assert_eq!(timeline[0].slug.as_deref(), Some("Valuation_Dean1951"));
        assert_eq!(timeline[0].score, 0.412);
        assert_eq!(timeline[0].paradigm, Paradigm::Academic);
    }

    #[test]
    fn different_year_is_appended_with_widened_paradigm() {
        let mut timeline = vec![bibliography_point(
            "Managerial Economics",
            "Dean, Joel",
            1958,
            Paradigm::Practitioner,
            -0.2,
        )];
        let mut index = SurnameIndex::default();
        index.insert_paradigm("dean", 1950, Paradigm::Academic);
        let notes = [note("Valuation_Dean1951", "Dean", Some(1951), Paradigm::PreSplit)];
        let counts = merge_notes(&mut timeline, &notes, &index, 200);

        assert_eq!(counts, MergeCounts { merged: 0, appended: 1 });
        assert_eq!(timeline.len(), 2);
        assert!(!timeline[0].has_note);
        assert_eq!(timeline[1].paradigm, Paradigm::Academic);
        assert_eq!(timeline[1].score, 0.0);
    }

    #[test]
    fn a_point_is_claimed_by_one_note_only() {
        let mut timeline = vec![bibliography_point("A", "Miller", 1961, Paradigm::Academic, 0.5)];
        let notes = [
            note("First", "Miller", Some(1961), Paradigm::Transitional),
            note("Second", "Miller", Some(1961), Paradigm::Transitional),
        ];
        let counts = merge_notes(&mut timeline, &notes, &SurnameIndex::default(), 200);
        assert_eq!(counts, MergeCounts { merged: 1, appended: 1 });
        assert_eq!(timeline[1].paradigm, Paradigm::Transitional);
    }

    #[test]
    fn notes_without_year_or_surname() {
        let mut timeline = vec![bibliography_point("A", "", 1990, Paradigm::Academic, 0.1)];
        let notes = [
            note("Undated", "Someone", None, Paradigm::Academic),
            note("Anonymous", "", Some(1990), Paradigm::Practitioner),
        ];
        let counts = merge_notes(&mut timeline, &notes, &SurnameIndex::default(), 200);
        assert_eq!(counts, MergeCounts { merged: 0, appended: 1 });
        assert_eq!(timeline[1].paradigm, Paradigm::Practitioner);
    }

    #[test]
    fn sort_is_stable_within_a_year() {
        let mut timeline = vec![
            bibliography_point("late", "x", 1990, Paradigm::Academic, 0.0),
            bibliography_point("b", "x", 1950, Paradigm::Academic, 0.0),
            bibliography_point("a", "x", 1950, Paradigm::Academic, 0.0),
        ];
        sort_by_year(&mut timeline);
        let titles: Vec<&str> = timeline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "late"]);
    }
}
