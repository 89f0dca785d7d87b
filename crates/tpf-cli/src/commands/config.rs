use anyhow::Context;
use tpf_config::TpfConfig;

/// Handle `tpf config`. Always TOML, the format the config files use.
pub fn handle(config: &TpfConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(config).context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}
