//! Filesystem layout of the literature tree.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_literature_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_textbooks_dir() -> PathBuf {
    PathBuf::from("Textbooks")
}

fn default_extra_corpus_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("Historical Railways")]
}

fn default_research_notes_dir() -> PathBuf {
    PathBuf::from("Research Notes")
}

fn default_bibliography() -> PathBuf {
    PathBuf::from("Bibliographies/Omnibus_Book_Bibliography.csv")
}

fn default_content_scores() -> PathBuf {
    PathBuf::from("website/scores.csv")
}

fn default_style_scores() -> PathBuf {
    PathBuf::from("website/stream_scores.csv")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("website/build")
}

/// Locations of inputs, caches and outputs.
///
/// Relative paths are resolved against `literature_root`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_literature_root")]
    pub literature_root: PathBuf,

    /// Primary PDF corpus, scanned by both passes.
    #[serde(default = "default_textbooks_dir")]
    pub textbooks_dir: PathBuf,

    /// Additional corpora included in the content pass only.
    #[serde(default = "default_extra_corpus_dirs")]
    pub extra_corpus_dirs: Vec<PathBuf>,

    #[serde(default = "default_research_notes_dir")]
    pub research_notes_dir: PathBuf,

    /// Master bibliography exported as CSV.
    #[serde(default = "default_bibliography")]
    pub bibliography: PathBuf,

    /// Content-pass cache (NPV vs EPS).
    #[serde(default = "default_content_scores")]
    pub content_scores: PathBuf,

    /// Style-pass cache (academic vs practitioner style).
    #[serde(default = "default_style_scores")]
    pub style_scores: PathBuf,

    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            literature_root: default_literature_root(),
            textbooks_dir: default_textbooks_dir(),
            extra_corpus_dirs: default_extra_corpus_dirs(),
            research_notes_dir: default_research_notes_dir(),
            bibliography: default_bibliography(),
            content_scores: default_content_scores(),
            style_scores: default_style_scores(),
            build_dir: default_build_dir(),
        }
    }
}

impl PathsConfig {
    /// Resolve a configured path against the literature root.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.literature_root.join(path)
        }
    }

    #[must_use]
    pub fn textbooks(&self) -> PathBuf {
        self.resolve(&self.textbooks_dir)
    }

    #[must_use]
    pub fn extra_corpora(&self) -> Vec<PathBuf> {
        self.extra_corpus_dirs
            .iter()
            .map(|dir| self.resolve(dir))
            .collect()
    }

    #[must_use]
    pub fn research_notes(&self) -> PathBuf {
        self.resolve(&self.research_notes_dir)
    }

    #[must_use]
    pub fn bibliography_file(&self) -> PathBuf {
        self.resolve(&self.bibliography)
    }

    #[must_use]
    pub fn content_scores_file(&self) -> PathBuf {
        self.resolve(&self.content_scores)
    }

    #[must_use]
    pub fn style_scores_file(&self) -> PathBuf {
        self.resolve(&self.style_scores)
    }

    #[must_use]
    pub fn build(&self) -> PathBuf {
        self.resolve(&self.build_dir)
    }
}
