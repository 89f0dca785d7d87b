use tpf_config::TpfConfig;
use tpf_notes::NoteParser;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NoteArgs;
use crate::commands::read_lossy;
use crate::output::output;

/// Handle `tpf note`.
pub fn handle(args: &NoteArgs, config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_lossy(&args.file)?;
    let filename = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |name| name.to_string_lossy().into_owned());

    let note = NoteParser::from_config(config).parse(&raw, &filename)?;
    output(&note, flags.format)
}
