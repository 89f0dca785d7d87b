//! End-to-end reconciliation over a small literature tree on disk.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tpf_config::TpfConfig;
use tpf_core::enums::{Paradigm, Stream};
use tpf_reconcile::output::{DATA_DIR, TIMELINE_FILE, write_datasets};
use tpf_reconcile::{ReconcileInputs, ReconcileSettings, reconcile};
use tpf_scan::cache::{ContentScoreRow, StyleScoreRow, write_content_scores, write_style_scores};

const BIBLIOGRAPHY: &str = "\
Author,Title,Year,Stream,Topic,Have?,Our Filename,Our Path(s),Archive URL,Key Concepts
\"Dean, Joel\",Managerial Economics,1958,Practitioner,Economics,YES,dean.pdf,Textbooks/Practitioner/dean.pdf,,
\"Brealey, Richard\",Principles of Corporate Finance,1981,Practitioner,Corporate,YES,brealey.pdf,Textbooks/Practitioner/brealey.pdf,,NPV
\"Weston, Fred\",Managerial Finance,1962,Practitioner,Corporate,no,weston.pdf,Textbooks/Practitioner/weston.pdf,,
\"Ripley, William\",Railroads,1915,Practitioner,Rail,YES,ripley.pdf,Historical Railways/ripley.pdf,,
\"Graham, Benjamin\",Security Analysis,1934,Practitioner,Equity,YES,graham.pdf,Textbooks/Practitioner/graham.pdf,,
";

const DEAN_NOTE: &str = "\
# Dean (1951): Capital Budgeting

Joel Dean's monograph brings the discounting of project cash flows into corporate practice.

## Key Finding

Rank investment projects by their discounted rate of return against the cost of capital.
";

const GRAHAM_NOTE: &str = "\
# Graham (1934): Security Analysis

Graham and Dodd set out the normal earnings multiplier for common stocks.

## Key Finding

Value a common stock as average earnings times a multiplier, tested against assets.
";

fn content(filename: &str, npv: u64, eps: u64, score: f64) -> ContentScoreRow {
    ContentScoreRow {
        filename: filename.into(),
        path: format!("Textbooks/{filename}"),
        author: String::new(),
        title: String::new(),
        year: 0,
        npv_hits: npv,
        eps_hits: eps,
        score,
        top_npv_terms: String::new(),
        top_eps_terms: String::new(),
    }
}

fn style(filename: &str, acad: u64, prac: u64, score: f64) -> StyleScoreRow {
    StyleScoreRow {
        filename: filename.into(),
        path: format!("Textbooks/{filename}"),
        acad_hits: acad,
        prac_hits: prac,
        stream_score: score,
        top_acad_terms: String::new(),
        top_prac_terms: String::new(),
    }
}

fn literature_tree(root: &Path) -> TpfConfig {
    let mut config = TpfConfig::default();
    config.paths.literature_root = root.to_path_buf();
    // Dean is on the shipped allow-list; Graham's note has to be added.
    config
        .notes
        .timeline_slugs
        .push("EPS_Graham1934_SecurityAnalysis".to_string());

    let bibliography = config.paths.bibliography_file();
    fs::create_dir_all(bibliography.parent().unwrap()).unwrap();
    fs::write(&bibliography, BIBLIOGRAPHY).unwrap();

    write_content_scores(
        &config.paths.content_scores_file(),
        &[
            content("dean.pdf", 30, 10, 0.5),
            content("brealey.pdf", 90, 10, 0.8),
            content("weston.pdf", 5, 5, 0.0),
            content("ripley.pdf", 0, 40, -1.0),
            content("graham.pdf", 2, 38, -0.9),
        ],
    )
    .unwrap();
    write_style_scores(
        &config.paths.style_scores_file(),
        &[
            // 12 / 15 hits academic: 0.6 with evidence 15, overrides the folder.
            style("brealey.pdf", 12, 3, 0.6),
            // Same score on 8 hits stays with the folder.
            style("weston.pdf", 6, 2, 0.6),
        ],
    )
    .unwrap();

    let notes = config.paths.research_notes();
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("Valuation_Dean1951_CapitalBudgeting.md"), DEAN_NOTE).unwrap();
    fs::write(notes.join("EPS_Graham1934_SecurityAnalysis.md"), GRAHAM_NOTE).unwrap();

    config
}

fn build(config: &TpfConfig) -> tpf_reconcile::ReconcileOutput {
    let inputs = ReconcileInputs::load(config).unwrap();
    reconcile(&inputs, &ReconcileSettings::from_config(config))
}

#[test]
fn style_override_needs_enough_evidence() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    let stream_of = |filename: &str| {
        output
            .classifications
            .iter()
            .find(|c| c.filename == filename)
            .map(|c| (c.folder_stream, c.stream, c.stream_overridden))
            .unwrap()
    };
    assert_eq!(
        stream_of("brealey.pdf"),
        (Stream::Practitioner, Stream::Academic, true)
    );
    assert_eq!(
        stream_of("weston.pdf"),
        (Stream::Practitioner, Stream::Practitioner, false)
    );
    assert_eq!(output.stats.stream_overrides, 1);
}

#[test]
fn excluded_prefixes_leave_the_library() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    assert_eq!(output.stats.bibliography_entries, 5);
    assert_eq!(output.stats.excluded_entries, 1);
    assert_eq!(output.library.len(), 4);
    assert!(output.library.iter().all(|e| e.our_filename != "ripley.pdf"));
    assert!(output.timeline.iter().all(|e| e.title != "Railroads"));
}

#[test]
fn timeline_is_gated_by_evidence() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    // weston has 10 content hits, under the gate of 20.
    assert!(output.timeline.iter().all(|e| e.title != "Managerial Finance"));
    let weston = output
        .classifications
        .iter()
        .find(|c| c.filename == "weston.pdf")
        .unwrap();
    assert!(!weston.on_timeline);
}

#[test]
fn dean_note_is_appended_not_merged() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    let deans: Vec<_> = output
        .timeline
        .iter()
        .filter(|e| e.author.contains("Dean"))
        .collect();
    assert_eq!(deans.len(), 2);
    assert_eq!(deans[0].year, 1951);
    assert!(deans[0].has_note);
    assert_eq!(deans[0].slug.as_deref(), Some("Valuation_Dean1951_CapitalBudgeting"));
    assert_eq!(deans[1].year, 1958);
    assert!(!deans[1].has_note);
}

#[test]
fn graham_note_replaces_its_bibliography_point() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    let grahams: Vec<_> = output
        .timeline
        .iter()
        .filter(|e| e.year == 1934)
        .collect();
    assert_eq!(grahams.len(), 1);
    assert!(grahams[0].has_note);
    assert_eq!(grahams[0].score, -0.9);
    assert_eq!(grahams[0].paradigm, Paradigm::Practitioner);
    assert!(grahams[0].key_finding.starts_with("Value a common stock"));
    assert_eq!(output.stats.notes_merged, 1);
    assert_eq!(output.stats.notes_appended, 1);
}

#[test]
fn notes_off_the_allow_list_stay_off_the_timeline() {
    let tmp = TempDir::new().unwrap();
    let config = literature_tree(tmp.path());
    fs::write(
        config.paths.research_notes().join("EPS_Jensen1986_AgencyCosts.md"),
        "# Jensen (1986): Agency Costs of Free Cash Flow\n\n\
         Managers with free cash flow overinvest rather than pay it out to shareholders.\n",
    )
    .unwrap();

    let output = build(&config);
    assert_eq!(output.stats.notes_loaded, 3);
    assert!(output.timeline.iter().all(|e| e.year != 1986));
    assert_eq!(output.stats.notes_appended, 1);
}

#[test]
fn timeline_is_sorted_by_year() {
    let tmp = TempDir::new().unwrap();
    let output = build(&literature_tree(tmp.path()));

    let years: Vec<u16> = output.timeline.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![1934, 1951, 1958, 1981]);
}

#[test]
fn identical_inputs_give_identical_json() {
    let tmp = TempDir::new().unwrap();
    let config = literature_tree(tmp.path());
    let build_dir = config.paths.build();

    write_datasets(&build_dir, &build(&config), true).unwrap();
    let first = fs::read(build_dir.join(DATA_DIR).join(TIMELINE_FILE)).unwrap();
    write_datasets(&build_dir, &build(&config), true).unwrap();
    let second = fs::read(build_dir.join(DATA_DIR).join(TIMELINE_FILE)).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn missing_inputs_build_an_empty_dataset() {
    let tmp = TempDir::new().unwrap();
    let mut config = TpfConfig::default();
    config.paths.literature_root = tmp.path().to_path_buf();

    let output = build(&config);
    assert!(output.library.is_empty());
    assert!(output.timeline.is_empty());
}
