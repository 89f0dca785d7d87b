//! Named JSON Schemas for the pipeline's records and datasets.
//!
//! Schemas are generated once at construction with [`schemars::schema_for!`].
//! Validation compiles the named schema with `jsonschema` on each call.

use std::collections::HashMap;

use schemars::schema_for;
use serde::Serialize;
use tpf_core::entities::{
    BibliographyEntry, ClassificationRecord, LibraryEntry, NoteSection, ResearchNote,
    TimelineEntry,
};
use tpf_core::score::{PairScan, ScanResult};

use crate::error::SchemaError;

/// Name of the full timeline dataset schema.
pub const TIMELINE: &str = "timeline";
pub const LIBRARY: &str = "library";
pub const CLASSIFICATION: &str = "classification";

pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // Records
        register!(schemas, "research_note", ResearchNote);
        register!(schemas, "note_section", NoteSection);
        register!(schemas, "bibliography_entry", BibliographyEntry);
        register!(schemas, "classification_record", ClassificationRecord);
        register!(schemas, "library_entry", LibraryEntry);
        register!(schemas, "timeline_entry", TimelineEntry);
        register!(schemas, "scan_result", ScanResult);
        register!(schemas, "pair_scan", PairScan);

        // Datasets as written to disk
        register!(schemas, TIMELINE, Vec<TimelineEntry>);
        register!(schemas, LIBRARY, Vec<LibraryEntry>);
        register!(schemas, CLASSIFICATION, Vec<ClassificationRecord>);

        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, `ValidationFailed` with every violation
    /// otherwise.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Serialize `value` and validate it against a named schema.
    ///
    /// # Errors
    ///
    /// As [`Self::validate`]; a value that cannot be serialized is reported as
    /// a single validation failure.
    pub fn validate_value<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> Result<(), SchemaError> {
        let instance = serde_json::to_value(value).map_err(|e| SchemaError::ValidationFailed {
            errors: vec![e.to_string()],
        })?;
        self.validate(name, &instance)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
