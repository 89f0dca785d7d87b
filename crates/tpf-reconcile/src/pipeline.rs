//! The reconciliation build, inputs to datasets.
//!
//! Stage order:
//!
//! 1. Drop bibliography entries under excluded path prefixes.
//! 2. Resolve each remaining entry's stream (folder hint, then style override)
//!    and emit its library row and classification record.
//! 3. Put entries with a known year and enough content evidence on the timeline.
//! 4. Index every entry by (surname, year) and overlay the research notes.
//! 5. Stable-sort the timeline by year.

use serde::Serialize;
use tpf_config::{NotesConfig, TpfConfig};
use tpf_core::entities::{
    BibliographyEntry, ClassificationRecord, LibraryEntry, ResearchNote, TimelineEntry,
};
use tpf_core::score::PolarityScore;
use tpf_notes::{NoteParser, load_notes};
use tpf_scan::cache::{ContentScoreRow, StyleScoreRow, read_content_scores, read_style_scores};
use tracing::info;

use crate::bibliography::load_bibliography;
use crate::error::ReconcileError;
use crate::library::{is_excluded, library_entry};
use crate::scores::ScoreIndex;
use crate::stream::{StyleOverride, resolve_stream};
use crate::surname::{SurnameIndex, surname};
use crate::timeline::{MergeCounts, bibliography_point, merge_notes, sort_by_year};

/// Everything the build reads.
#[derive(Debug, Clone, Default)]
pub struct ReconcileInputs {
    pub bibliography: Vec<BibliographyEntry>,
    pub content_scores: Vec<ContentScoreRow>,
    pub style_scores: Vec<StyleScoreRow>,
    /// Parsed notes, already sorted by year then title.
    pub notes: Vec<ResearchNote>,
}

impl ReconcileInputs {
    /// Load the bibliography, both caches and the notes from configured paths.
    ///
    /// Missing files load as empty (with a warning).
    ///
    /// # Errors
    ///
    /// Returns an error when a file exists but cannot be parsed.
    pub fn load(config: &TpfConfig) -> Result<Self, ReconcileError> {
        let paths = &config.paths;
        let parser = NoteParser::from_config(config);
        Ok(Self {
            bibliography: load_bibliography(&paths.bibliography_file())?,
            content_scores: read_content_scores(&paths.content_scores_file())?,
            style_scores: read_style_scores(&paths.style_scores_file())?,
            notes: load_notes(&paths.research_notes(), &config.notes, &parser)?,
        })
    }
}

/// Thresholds and filters applied by [`reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileSettings {
    pub style_override: StyleOverride,
    pub min_timeline_hits: u64,
    pub key_finding_chars: usize,
    pub excluded_path_prefixes: Vec<String>,
    pub notes: NotesConfig,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self::from_config(&TpfConfig::default())
    }
}

impl ReconcileSettings {
    #[must_use]
    pub fn from_config(config: &TpfConfig) -> Self {
        Self {
            style_override: StyleOverride::from_thresholds(&config.thresholds),
            min_timeline_hits: config.thresholds.min_timeline_hits,
            key_finding_chars: config.thresholds.key_finding_chars,
            excluded_path_prefixes: config.library.excluded_path_prefixes.clone(),
            notes: config.notes.clone(),
        }
    }
}

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub bibliography_entries: usize,
    pub excluded_entries: usize,
    pub library_entries: usize,
    pub have_count: usize,
    pub stream_overrides: usize,
    pub content_rows: usize,
    pub style_rows: usize,
    pub content_rows_below_gate: usize,
    pub notes_loaded: usize,
    pub timeline_from_bibliography: usize,
    pub notes_merged: usize,
    pub notes_appended: usize,
    pub timeline_entries: usize,
}

/// The three datasets plus build statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileOutput {
    pub library: Vec<LibraryEntry>,
    pub classifications: Vec<ClassificationRecord>,
    pub timeline: Vec<TimelineEntry>,
    pub stats: ReconcileStats,
}

/// Run the reconciliation. Pure: identical inputs give identical output.
#[must_use]
pub fn reconcile(inputs: &ReconcileInputs, settings: &ReconcileSettings) -> ReconcileOutput {
    let scores = ScoreIndex::new(
        inputs.content_scores.clone(),
        inputs.style_scores.clone(),
        settings.min_timeline_hits,
    );

    let mut stats = ReconcileStats {
        bibliography_entries: inputs.bibliography.len(),
        have_count: inputs.bibliography.iter().filter(|e| e.have).count(),
        content_rows: scores.content_len(),
        style_rows: scores.style_len(),
        content_rows_below_gate: scores.below_gate(),
        notes_loaded: inputs.notes.len(),
        ..ReconcileStats::default()
    };

    let mut library = Vec::new();
    let mut classifications = Vec::new();
    let mut timeline = Vec::new();
    let mut index = SurnameIndex::default();

    for entry in &inputs.bibliography {
        if is_excluded(&entry.path, &settings.excluded_path_prefixes) {
            stats.excluded_entries += 1;
            continue;
        }

        let resolution = resolve_stream(
            &entry.path,
            entry.stream,
            scores.style(&entry.filename),
            settings.style_override,
        );
        if resolution.overridden {
            stats.stream_overrides += 1;
        }
        let paradigm = resolution.stream.paradigm();
        let content = scores.content(&entry.filename);
        let gated = scores.timeline_score(&entry.filename);
        let style = scores.style(&entry.filename);

        let on_timeline = entry.year.is_some() && gated.is_some();
        if let (Some(year), Some(row)) = (entry.year, gated) {
            timeline.push(bibliography_point(
                &entry.title,
                &entry.author,
                year,
                paradigm,
                row.polarity().value(),
            ));
        }

        let name = surname(&entry.author);
        if let Some(year) = entry.year.filter(|_| !name.is_empty()) {
            if let Some(row) = gated {
                index.insert_score(&name, year, row.polarity().value());
            }
            index.insert_paradigm(&name, year, paradigm);
        }

        classifications.push(ClassificationRecord {
            filename: entry.filename.clone(),
            path: entry.path.clone(),
            year: entry.year,
            content_score: content.map_or(PolarityScore::NEUTRAL, ContentScoreRow::polarity),
            content_evidence: content.map_or(0, ContentScoreRow::evidence),
            style_score: style.map(StyleScoreRow::polarity),
            style_evidence: style.map_or(0, StyleScoreRow::evidence),
            folder_stream: resolution.folder_stream,
            stream: resolution.stream,
            stream_overridden: resolution.overridden,
            on_timeline,
            resolved_paradigm: paradigm,
        });
        library.push(library_entry(entry, resolution.stream));
    }
    stats.library_entries = library.len();
    stats.timeline_from_bibliography = timeline.len();

    let MergeCounts { merged, appended } = merge_notes(
        &mut timeline,
        inputs.notes.iter().filter(|n| settings.notes.admits_on_timeline(&n.slug)),
        &index,
        settings.key_finding_chars,
    );
    stats.notes_merged = merged;
    stats.notes_appended = appended;

    sort_by_year(&mut timeline);
    stats.timeline_entries = timeline.len();

    info!(
        library = stats.library_entries,
        timeline = stats.timeline_entries,
        overrides = stats.stream_overrides,
        notes_merged = merged,
        notes_appended = appended,
        "reconciliation complete"
    );

    ReconcileOutput {
        library,
        classifications,
        timeline,
        stats,
    }
}
