//! Markdown research-note parsing.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tpf_config::TpfConfig;
use tpf_core::entities::{NoteSection, ResearchNote};

use crate::classify::ParadigmClassifier;
use crate::error::NoteError;
use crate::fields::{extract_author, extract_title, extract_year};

/// Heading of the content that precedes the first `##` section.
pub const PREAMBLE: &str = "_preamble";

pub const KEY_FINDING: &str = "Key Finding";
pub const SOURCE: &str = "Source";
pub const SIGNIFICANCE: &str = "Significance";
pub const CONNECTIONS: &str = "Connections";
/// Merged into [`SIGNIFICANCE`].
pub const PROJECT_SIGNIFICANCE: &str = "Significance for the EPS Project";

const CANONICAL: [&str; 6] = [
    PREAMBLE,
    KEY_FINDING,
    SOURCE,
    SIGNIFICANCE,
    CONNECTIONS,
    PROJECT_SIGNIFICANCE,
];

static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+)").expect("valid h2 regex"));

fn push_section(sections: &mut Vec<NoteSection>, heading: String, lines: &[&str]) {
    let body = lines.join("\n").trim().to_string();
    if let Some(existing) = sections.iter_mut().find(|s| s.heading == heading) {
        existing.body = body;
    } else {
        sections.push(NoteSection { heading, body });
    }
}

/// Split `text` into sections at `## Heading` lines.
///
/// The first section is always the preamble. A heading that repeats replaces
/// the earlier body but keeps its position. Bodies are trimmed.
#[must_use]
pub fn split_sections(text: &str) -> Vec<NoteSection> {
    let mut sections: Vec<NoteSection> = Vec::new();
    let mut heading = PREAMBLE.to_string();
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = H2.captures(line) {
            let next = caps[1].trim().to_string();
            push_section(&mut sections, std::mem::replace(&mut heading, next), &lines);
            lines.clear();
        } else {
            lines.push(line);
        }
    }
    push_section(&mut sections, heading, &lines);
    sections
}

fn body_of<'a>(sections: &'a [NoteSection], heading: &str) -> &'a str {
    sections
        .iter()
        .find(|s| s.heading == heading)
        .map_or("", |s| s.body.as_str())
}

/// Turns raw note text into a [`ResearchNote`].
#[derive(Debug, Clone)]
pub struct NoteParser {
    min_chars: usize,
    classifier: ParadigmClassifier,
}

impl Default for NoteParser {
    fn default() -> Self {
        Self::new(100, ParadigmClassifier::default())
    }
}

impl NoteParser {
    #[must_use]
    pub fn new(min_chars: usize, classifier: ParadigmClassifier) -> Self {
        Self {
            min_chars,
            classifier,
        }
    }

    #[must_use]
    pub fn from_config(config: &TpfConfig) -> Self {
        Self::new(
            config.thresholds.min_note_chars,
            ParadigmClassifier::from_config(&config.keywords, &config.thresholds),
        )
    }

    #[must_use]
    pub const fn classifier(&self) -> &ParadigmClassifier {
        &self.classifier
    }

    /// Parse one note.
    ///
    /// # Errors
    ///
    /// [`NoteError::TooShort`] when the trimmed text has fewer than the
    /// configured number of characters.
    pub fn parse(&self, raw: &str, filename: &str) -> Result<ResearchNote, NoteError> {
        let chars = raw.trim().chars().count();
        if chars < self.min_chars {
            return Err(NoteError::TooShort {
                filename: filename.to_string(),
                chars,
                min: self.min_chars,
            });
        }

        let slug = Path::new(filename)
            .file_stem()
            .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned());
        let title = extract_title(raw).unwrap_or_else(|| slug.clone());

        let sections = split_sections(raw);
        let key_finding = body_of(&sections, KEY_FINDING).to_string();
        let source = body_of(&sections, SOURCE).to_string();
        let connections = body_of(&sections, CONNECTIONS).to_string();

        let mut significance = body_of(&sections, SIGNIFICANCE).to_string();
        let project = body_of(&sections, PROJECT_SIGNIFICANCE);
        if !project.is_empty() {
            if significance.is_empty() {
                significance = project.to_string();
            } else {
                significance = format!("{significance}\n\n{project}");
            }
        }

        let details = sections
            .iter()
            .filter(|s| !CANONICAL.contains(&s.heading.as_str()) && !s.body.is_empty())
            .map(|s| format!("## {}\n\n{}", s.heading, s.body))
            .collect::<Vec<_>>()
            .join("\n\n");

        let year = extract_year(&title, filename);
        let author = extract_author(&title, filename);
        let paradigm = self.classifier.classify(raw, year);

        Ok(ResearchNote {
            slug,
            filename: filename.to_string(),
            title,
            author,
            year,
            sections,
            key_finding,
            source,
            significance,
            connections,
            details,
            paradigm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tpf_core::enums::Paradigm;

    #[test]
    fn sections_keep_document_order_and_preamble() {
        let sections = split_sections("lead in\n## A\none\n## B\n\ntwo\n### sub\nthree\n");
        let headings: Vec<&str> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec![PREAMBLE, "A", "B"]);
        assert_eq!(sections[0].body, "lead in");
        assert_eq!(sections[2].body, "two\n### sub\nthree");
    }

    #[test]
    fn no_headings_is_one_preamble() {
        let sections = split_sections("just text\nmore text");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, PREAMBLE);
    }

    #[test]
    fn repeated_heading_replaces_body_in_place() {
        let sections = split_sections("## A\nfirst\n## B\nb\n## A\nsecond");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1].heading, "A");
        assert_eq!(sections[1].body, "second");
    }

    #[test]
    fn project_significance_is_appended() {
        let raw = format!(
            "# Dean (1951): Capital Budgeting\n\n## Significance\nFirst.\n\n\
             ## Significance for the EPS Project\nSecond.\n\n## Method\nRanks projects.\n{}",
            "x".repeat(60)
        );
        let note = NoteParser::default()
            .parse(&raw, "Valuation_Dean1951_CapitalBudgeting.md")
            .unwrap();
        assert_eq!(note.significance, "First.\n\nSecond.");
        assert!(note.details.starts_with("## Method\n\nRanks projects."));
        assert_eq!(note.paradigm, Paradigm::PreSplit);
    }

    #[test]
    fn project_significance_fills_empty_significance() {
        let raw = format!(
            "# T\n## Significance for the EPS Project\nOnly this.\n{}",
            "y".repeat(100)
        );
        let note = NoteParser::default().parse(&raw, "Note.md").unwrap();
        assert!(note.significance.starts_with("Only this."));
        assert_eq!(note.details, "");
    }

    #[test]
    fn empty_detail_sections_are_dropped() {
        let raw = format!("# T\n## Empty\n\n## Full\nbody {}\n", "z".repeat(100));
        let note = NoteParser::default().parse(&raw, "Note.md").unwrap();
        assert!(note.details.starts_with("## Full\n\nbody"));
        assert!(!note.details.contains("Empty"));
    }
}
