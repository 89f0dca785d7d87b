//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tpf_config::TpfConfig;

#[test]
fn loads_paths_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
literature_root = "/data/EPS Literature"
textbooks_dir = "Books"
extra_corpus_dirs = []
bibliography = "/data/biblio.csv"
"#,
        )?;

        let config: TpfConfig = Figment::from(Serialized::defaults(TpfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.paths.textbooks(),
            PathBuf::from("/data/EPS Literature/Books")
        );
        assert!(config.paths.extra_corpora().is_empty());
        assert_eq!(
            config.paths.bibliography_file(),
            PathBuf::from("/data/biblio.csv")
        );
        // Unset fields keep their defaults.
        assert_eq!(
            config.paths.research_notes(),
            PathBuf::from("/data/EPS Literature/Research Notes")
        );
        Ok(())
    });
}

#[test]
fn loads_thresholds_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[thresholds]
stream_override_score = 0.6
min_override_hits = 12
min_timeline_hits = 30
",
        )?;

        let config: TpfConfig = Figment::from(Serialized::defaults(TpfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.thresholds.stream_override_score - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.thresholds.min_override_hits, 12);
        assert_eq!(config.thresholds.min_timeline_hits, 30);
        assert_eq!(config.thresholds.min_note_chars, 100);
        Ok(())
    });
}

#[test]
fn loads_keyword_overrides_and_note_lists() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[keywords]
practitioner = ["earnings yield", "P/E"]

[notes]
excluded = []
timeline_slugs = ["Valuation_Dean1951_CapitalBudgeting"]
"#,
        )?;

        let config: TpfConfig = Figment::from(Serialized::defaults(TpfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.keywords.practitioner,
            Some(vec!["earnings yield".to_string(), "P/E".to_string()])
        );
        assert!(config.keywords.academic.is_none());
        assert!(config.notes.excluded.is_empty());
        assert!(config.notes.admits_on_timeline("Valuation_Dean1951_CapitalBudgeting"));
        assert!(!config.notes.admits_on_timeline("Other_Note"));
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "paradigms.toml",
            r"
[scan]
style_max_pages = 5
content_max_pages = 400
",
        )?;

        let config = TpfConfig::load().expect("config loads");
        assert_eq!(config.scan.style_max_pages, 5);
        assert_eq!(config.scan.content_max_pages, Some(400));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "paradigms.toml",
            r"
[scan]
style_max_pages = 0
",
        )?;

        let err = TpfConfig::load().expect_err("zero pages should be rejected");
        assert!(err.to_string().contains("scan.style_max_pages"));
        Ok(())
    });
}

#[test]
fn untouched_sections_equal_the_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[scan]
min_text_chars = 250
",
        )?;

        let config: TpfConfig = Figment::from(Serialized::defaults(TpfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let defaults = TpfConfig::default();
        assert_eq!(config.scan.min_text_chars, 250);
        assert_eq!(config.paths, defaults.paths);
        assert_eq!(config.thresholds, defaults.thresholds);
        assert_eq!(config.notes, defaults.notes);
        assert_eq!(config.library, defaults.library);
        Ok(())
    });
}
