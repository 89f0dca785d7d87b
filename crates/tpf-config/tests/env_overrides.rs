use figment::Jail;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tpf_config::TpfConfig;

#[test]
fn env_vars_fill_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TPF_PATHS__LITERATURE_ROOT", "/srv/literature");
        jail.set_env("TPF_THRESHOLDS__MIN_TIMELINE_HITS", "35");

        let config = TpfConfig::load().expect("config loads");
        assert_eq!(config.paths.literature_root, PathBuf::from("/srv/literature"));
        assert_eq!(config.thresholds.min_timeline_hits, 35);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "paradigms.toml",
            r"
[thresholds]
min_override_hits = 4
",
        )?;
        jail.set_env("TPF_THRESHOLDS__MIN_OVERRIDE_HITS", "16");

        let config = TpfConfig::load().expect("config loads");
        assert_eq!(config.thresholds.min_override_hits, 16);
        Ok(())
    });
}
