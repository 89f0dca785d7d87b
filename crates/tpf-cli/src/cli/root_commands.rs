use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use tpf_core::Year;
use tpf_core::enums::Axis;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Content pass: score every PDF on the NPV/EPS axis and write the content cache.
    Score,
    /// Style pass: score the front matter of every textbook and write the style cache.
    ClassifyStream,
    /// Scan one plain-text file against a lexicon pair.
    Scan(ScanArgs),
    /// Parse one research note.
    Note(NoteArgs),
    /// Classify one text into a paradigm.
    Classify(ClassifyArgs),
    /// Reconcile caches, bibliography and notes; write the datasets.
    Build(BuildArgs),
    /// Print the JSON Schema of an output type (lists names without one).
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AxisArg {
    Content,
    Style,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::Content => Self::Content,
            AxisArg::Style => Self::Style,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Plain-text file to scan
    pub file: PathBuf,

    /// Lexicon pair to scan against
    #[arg(long, default_value = "content")]
    pub axis: AxisArg,
}

#[derive(Clone, Debug, Args)]
pub struct NoteArgs {
    /// Markdown research note
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Text file to classify
    pub file: PathBuf,

    /// Publication year; 1958-1963 is always transitional, before 1958 pre-split
    #[arg(long)]
    pub year: Option<Year>,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Keep existing build-directory contents instead of cleaning first
    #[arg(long)]
    pub no_clean: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name (e.g. timeline, timeline_entry)
    pub type_name: Option<String>,
}
