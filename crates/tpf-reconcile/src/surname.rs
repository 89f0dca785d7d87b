//! Surname extraction and the (surname, year) indices used to place notes.

use std::collections::{BTreeSet, HashMap};
use tpf_core::Year;
use tpf_core::enums::Paradigm;

/// Year offsets tried, in order, when a note's year has no exact bibliography
/// match. Edition years drift; the earlier year is tried first.
pub const YEAR_WIDENING: [i32; 5] = [0, -1, 1, -2, 2];

/// Case-folded surname: the text before the first comma (`Last, First`),
/// else the last whitespace-separated word (`First Last`).
#[must_use]
pub fn surname(author: &str) -> String {
    let author = author.trim();
    if let Some((last, _)) = author.split_once(',') {
        return last.trim().to_lowercase();
    }
    author
        .split_whitespace()
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Lookups from bibliography entries keyed by (surname, year).
#[derive(Debug, Clone, Default)]
pub struct SurnameIndex {
    scores: HashMap<(String, Year), f64>,
    paradigms: HashMap<(String, Year), Paradigm>,
}

impl SurnameIndex {
    /// Record a timeline-eligible content score. Later entries win.
    pub fn insert_score(&mut self, surname: &str, year: Year, score: f64) {
        self.scores.insert((surname.to_string(), year), score);
    }

    /// Record a stream-derived paradigm.
    ///
    /// A non-practitioner label always overwrites; practitioner only fills an
    /// empty slot, so a single academic edition marks the (surname, year).
    pub fn insert_paradigm(&mut self, surname: &str, year: Year, paradigm: Paradigm) {
        let key = (surname.to_string(), year);
        if paradigm != Paradigm::Practitioner || !self.paradigms.contains_key(&key) {
            self.paradigms.insert(key, paradigm);
        }
    }

    #[must_use]
    pub fn score(&self, surname: &str, year: Year) -> Option<f64> {
        self.scores.get(&(surname.to_string(), year)).copied()
    }

    /// Paradigm at `year`, widening by [`YEAR_WIDENING`].
    #[must_use]
    pub fn paradigm_near(&self, surname: &str, year: Year) -> Option<Paradigm> {
        YEAR_WIDENING.iter().find_map(|delta| {
            let shifted = Year::try_from(i32::from(year) + delta).ok()?;
            self.paradigms.get(&(surname.to_string(), shifted)).copied()
        })
    }

    /// The paradigm shared by every indexed year of `surname`, if unambiguous.
    #[must_use]
    pub fn sole_paradigm(&self, surname: &str) -> Option<Paradigm> {
        let labels: BTreeSet<Paradigm> = self
            .paradigms
            .iter()
            .filter(|((name, _), _)| name == surname)
            .map(|(_, paradigm)| *paradigm)
            .collect();
        if labels.len() == 1 {
            labels.into_iter().next()
        } else {
            None
        }
    }
}
