use anyhow::Context;
use serde::Serialize;
use tpf_config::TpfConfig;
use tpf_scan::cache::{StyleScoreRow, write_style_scores};
use tpf_scan::{Leaning, LexiconPair, PassOptions, PdfTextExtractor, collect_documents, run_pass};

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ClassifyStreamResponse {
    cache: String,
    documents: usize,
    failures: usize,
    max_pages: usize,
    leaning: Leaning,
}

/// Handle `tpf classify-stream`. Only the textbook tree is read.
pub fn handle(config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paths = &config.paths;
    let documents = collect_documents(
        &paths.literature_root,
        &[paths.textbooks()],
        &config.scan.excluded_dir_names,
    )
    .context("failed to enumerate the textbook corpus")?;

    let pair = LexiconPair::style().context("failed to compile the style lexicons")?;
    let max_pages = config.scan.style_max_pages;

    let progress = Progress::bar(documents.len(), "style pass");
    let outcome = run_pass(
        &documents,
        &PdfTextExtractor::new(),
        &pair,
        PassOptions::style(max_pages),
        |_, doc| progress.tick(&doc.filename),
    );
    progress.finish_ok("style pass done");

    let rows: Vec<StyleScoreRow> = outcome.documents.iter().map(StyleScoreRow::from_scored).collect();
    let cache = paths.style_scores_file();
    write_style_scores(&cache, &rows)
        .with_context(|| format!("failed to write {}", cache.display()))?;

    output(
        &ClassifyStreamResponse {
            cache: cache.display().to_string(),
            documents: rows.len(),
            failures: outcome.failures(),
            max_pages,
            leaning: outcome.leaning(),
        },
        flags.format,
    )
}
