use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::providers::Serialized;
use tpf_config::TpfConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration, with `--root` applied last.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TpfConfig> {
    load_dotenv(flags.root.as_deref())?;

    let mut figment = TpfConfig::figment();
    if let Some(root) = &flags.root {
        figment = figment.merge(Serialized::default("paths.literature_root", root));
    }

    let config: TpfConfig = figment
        .extract()
        .map_err(tpf_config::ConfigError::from)
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// `.env` in the literature root wins over one in the working directory.
fn load_dotenv(root: Option<&Path>) -> anyhow::Result<()> {
    let candidates: Vec<PathBuf> = root
        .map(|root| root.join(".env"))
        .into_iter()
        .chain([PathBuf::from(".env")])
        .collect();

    for env_path in candidates {
        if env_path.is_file() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }
    Ok(())
}
