use anyhow::Context;
use serde::Serialize;
use tpf_core::enums::Axis;
use tpf_core::score::PairScan;
use tpf_scan::{LexiconPair, scan_pair};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::read_lossy;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScanResponse {
    file: String,
    axis: Axis,
    evidence: u64,
    #[serde(flatten)]
    scan: PairScan,
}

/// Handle `tpf scan`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let axis = Axis::from(args.axis);
    let text = read_lossy(&args.file)?;
    let pair = LexiconPair::for_axis(axis)
        .with_context(|| format!("failed to compile the {axis} lexicons"))?;
    let scan = scan_pair(&text, &pair);

    output(
        &ScanResponse {
            file: args.file.display().to_string(),
            axis,
            evidence: scan.evidence(),
            scan,
        },
        flags.format,
    )
}
