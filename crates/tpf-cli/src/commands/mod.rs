use std::path::Path;

use anyhow::Context;
use tpf_config::TpfConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod build;
pub mod classify;
pub mod classify_stream;
pub mod config;
pub mod note;
pub mod scan;
pub mod schema;
pub mod score;

/// Route a parsed command that needs configuration to its handler.
pub fn dispatch(command: &Commands, config: &TpfConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Score => score::handle(config, flags),
        Commands::ClassifyStream => classify_stream::handle(config, flags),
        Commands::Scan(args) => scan::handle(args, flags),
        Commands::Note(args) => note::handle(args, config, flags),
        Commands::Classify(args) => classify::handle(args, config, flags),
        Commands::Build(args) => build::handle(args, config, flags),
        Commands::Config => config::handle(config),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}

/// Read a text file with invalid UTF-8 replaced rather than rejected.
pub fn read_lossy(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
