use tpf_core::entities::{ClassificationRecord, LibraryEntry};
use tpf_core::enums::{Paradigm, Stream};
use tpf_core::score::PolarityScore;
use tpf_schema::registry::{CLASSIFICATION, LIBRARY};
use tpf_schema::{SchemaError, SchemaRegistry};

fn record(style: Option<PolarityScore>) -> ClassificationRecord {
    ClassificationRecord {
        filename: "brealey.pdf".into(),
        path: "Textbooks/Practitioner/brealey.pdf".into(),
        year: Some(1981),
        content_score: PolarityScore::from_hits(90, 10),
        content_evidence: 100,
        style_score: style,
        style_evidence: 15,
        folder_stream: Stream::Practitioner,
        stream: Stream::Academic,
        stream_overridden: true,
        on_timeline: true,
        resolved_paradigm: Paradigm::Academic,
    }
}

#[test]
fn classification_dataset_validates_with_and_without_style() {
    let registry = SchemaRegistry::new();
    let records = vec![
        record(Some(PolarityScore::from_hits(12, 3))),
        record(None),
    ];
    registry.validate_value(CLASSIFICATION, &records).unwrap();
}

#[test]
fn unset_stream_is_a_valid_library_value() {
    let registry = SchemaRegistry::new();
    let entry = LibraryEntry {
        author: "Anonymous".into(),
        title: "Railway Securities".into(),
        year: None,
        stream: Stream::Unset,
        topic: String::new(),
        have: false,
        url: String::new(),
        key_concepts: String::new(),
        our_filename: String::new(),
    };
    registry.validate_value(LIBRARY, &vec![entry]).unwrap();
}

#[test]
fn library_rejects_a_string_year() {
    let registry = SchemaRegistry::new();
    let instance = serde_json::json!([{
        "author": "Dean",
        "title": "Managerial Economics",
        "year": "1951",
        "stream": "Practitioner",
        "topic": "",
        "have": true,
        "url": "",
        "key_concepts": "",
        "our_filename": "dean.pdf"
    }]);
    assert!(matches!(
        registry.validate(LIBRARY, &instance),
        Err(SchemaError::ValidationFailed { .. })
    ));
}
