use anyhow::Context;
use serde::Serialize;
use tpf_config::TpfConfig;
use tpf_reconcile::output::{WrittenFiles, write_datasets};
use tpf_reconcile::{ReconcileInputs, ReconcileSettings, ReconcileStats, reconcile};
use tpf_schema::SchemaRegistry;
use tpf_schema::registry::TIMELINE;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BuildResponse {
    build_dir: String,
    #[serde(flatten)]
    files: WrittenFiles,
    stats: ReconcileStats,
}

/// Handle `tpf build`.
pub fn handle(args: &BuildArgs, config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inputs = ReconcileInputs::load(config).context("failed to load build inputs")?;
    let result = reconcile(&inputs, &ReconcileSettings::from_config(config));

    if let Err(error) = SchemaRegistry::new().validate_value(TIMELINE, &result.timeline) {
        tracing::warn!(%error, "timeline does not match its schema");
    }

    let build_dir = config.paths.build();
    let files = write_datasets(&build_dir, &result, !args.no_clean)
        .with_context(|| format!("failed to write datasets into {}", build_dir.display()))?;

    output(
        &BuildResponse {
            build_dir: build_dir.display().to_string(),
            files,
            stats: result.stats,
        },
        flags.format,
    )
}
