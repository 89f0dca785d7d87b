//! Serde roundtrip and JsonSchema validation tests for the record types.

use schemars::schema_for;
use tpf_core::entities::*;
use tpf_core::enums::*;
use tpf_core::score::{PairScan, PolarityScore, ScanResult};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    research_note_roundtrip,
    ResearchNote,
    ResearchNote {
        slug: "Valuation_Dean1951_CapitalBudgeting".into(),
        filename: "Valuation_Dean1951_CapitalBudgeting.md".into(),
        title: "Dean (1951): Capital Budgeting".into(),
        author: "Dean".into(),
        year: Some(1951),
        sections: vec![
            NoteSection {
                heading: "_preamble".into(),
                body: String::new(),
            },
            NoteSection {
                heading: "Key Finding".into(),
                body: "Ranks projects by rate of return.".into(),
            },
        ],
        key_finding: "Ranks projects by rate of return.".into(),
        source: String::new(),
        significance: String::new(),
        connections: String::new(),
        details: String::new(),
        paradigm: Paradigm::PreSplit,
    }
);

roundtrip_and_validate!(
    bibliography_entry_roundtrip,
    BibliographyEntry,
    BibliographyEntry {
        author: "Graham, Benjamin".into(),
        title: "Security Analysis".into(),
        year: Some(1934),
        stream: Stream::Practitioner,
        topic: "Valuation".into(),
        have: true,
        filename: "Graham - Security Analysis (Book 1934).pdf".into(),
        path: "Textbooks/Practitioner/Graham - Security Analysis (Book 1934).pdf".into(),
        url: String::new(),
        key_concepts: "margin of safety".into(),
    }
);

roundtrip_and_validate!(
    bibliography_entry_unset_stream_roundtrip,
    BibliographyEntry,
    BibliographyEntry {
        title: "Untitled pamphlet".into(),
        ..Default::default()
    }
);

roundtrip_and_validate!(
    classification_record_roundtrip,
    ClassificationRecord,
    ClassificationRecord {
        filename: "Brealey - Principles (Book 1981).pdf".into(),
        path: "Textbooks/Practitioner/Brealey - Principles (Book 1981).pdf".into(),
        year: Some(1981),
        content_score: PolarityScore::from_hits(80, 20),
        content_evidence: 100,
        style_score: Some(PolarityScore::from_hits(12, 3)),
        style_evidence: 15,
        folder_stream: Stream::Practitioner,
        stream: Stream::Academic,
        stream_overridden: true,
        on_timeline: true,
        resolved_paradigm: Paradigm::Academic,
    }
);

roundtrip_and_validate!(
    library_entry_roundtrip,
    LibraryEntry,
    LibraryEntry {
        author: "Dewing, Arthur Stone".into(),
        title: "The Financial Policy of Corporations".into(),
        year: None,
        stream: Stream::Both,
        topic: "Corporate finance".into(),
        have: false,
        url: "https://archive.org/details/financialpolicy".into(),
        key_concepts: String::new(),
        our_filename: String::new(),
    }
);

roundtrip_and_validate!(
    timeline_entry_roundtrip,
    TimelineEntry,
    TimelineEntry {
        slug: None,
        title: "Investment Value".into(),
        author: "Williams, John Burr".into(),
        year: 1938,
        paradigm: Paradigm::Practitioner,
        score: -0.125,
        key_finding: String::new(),
        has_note: false,
    }
);

roundtrip_and_validate!(
    pair_scan_roundtrip,
    PairScan,
    PairScan::new(
        ScanResult::from_counts([("npv", 4), ("dcf", 1)]),
        ScanResult::from_counts([("eps", 2)]),
    )
);

#[test]
fn unset_stream_serializes_as_empty_string() {
    let json = serde_json::to_value(Stream::Unset).unwrap();
    assert_eq!(json, serde_json::json!(""));
}

#[test]
fn polarity_score_is_a_bare_number() {
    let json = serde_json::to_value(PolarityScore::from_hits(1, 3)).unwrap();
    assert_eq!(json, serde_json::json!(-0.5));
}
