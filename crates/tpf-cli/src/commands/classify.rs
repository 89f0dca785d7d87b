use serde::Serialize;
use tpf_config::TpfConfig;
use tpf_core::Year;
use tpf_core::enums::{Era, Paradigm};
use tpf_notes::ParadigmClassifier;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::commands::read_lossy;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    file: String,
    year: Option<Year>,
    era: Option<Era>,
    practitioner_keywords: usize,
    academic_keywords: usize,
    paradigm: Paradigm,
}

/// Handle `tpf classify`.
pub fn handle(args: &ClassifyArgs, config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_lossy(&args.file)?;
    let classifier = ParadigmClassifier::from_config(&config.keywords, &config.thresholds);
    let counts = classifier.keyword_counts(&text);

    output(
        &ClassifyResponse {
            file: args.file.display().to_string(),
            year: args.year,
            era: args.year.map(Era::of),
            practitioner_keywords: counts.practitioner,
            academic_keywords: counts.academic,
            paradigm: classifier.classify(&text, args.year),
        },
        flags.format,
    )
}
