use anyhow::Context;
use serde::Serialize;
use tpf_config::TpfConfig;
use tpf_scan::cache::{ContentScoreRow, write_content_scores};
use tpf_scan::{
    LexiconPair, PassOptions, PdfTextExtractor, ScoreDistribution, collect_documents, run_pass,
};

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ScoreResponse {
    cache: String,
    documents: usize,
    failures: usize,
    distribution: ScoreDistribution,
}

/// Handle `tpf score`.
pub fn handle(config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paths = &config.paths;
    let mut dirs = vec![paths.textbooks()];
    dirs.extend(paths.extra_corpora());
    let documents = collect_documents(&paths.literature_root, &dirs, &config.scan.excluded_dir_names)
        .context("failed to enumerate the PDF corpus")?;

    let pair = LexiconPair::content().context("failed to compile the content lexicons")?;
    let options = PassOptions::content(config.scan.content_max_pages, config.scan.min_text_chars);

    let progress = Progress::bar(documents.len(), "content pass");
    let outcome = run_pass(&documents, &PdfTextExtractor::new(), &pair, options, |_, doc| {
        progress.tick(&doc.filename);
    });
    progress.finish_ok("content pass done");

    let rows: Vec<ContentScoreRow> = outcome.documents.iter().map(ContentScoreRow::from_scored).collect();
    let cache = paths.content_scores_file();
    write_content_scores(&cache, &rows)
        .with_context(|| format!("failed to write {}", cache.display()))?;

    output(
        &ScoreResponse {
            cache: cache.display().to_string(),
            documents: rows.len(),
            failures: outcome.failures(),
            distribution: outcome.distribution(),
        },
        flags.format,
    )
}
