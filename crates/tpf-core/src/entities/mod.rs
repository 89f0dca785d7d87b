//! Record structs produced and consumed by the pipeline stages.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be written as JSON datasets and validated against their schemas.

mod bibliography;
mod classification;
mod library;
mod note;
mod timeline;

pub use bibliography::BibliographyEntry;
pub use classification::ClassificationRecord;
pub use library::LibraryEntry;
pub use note::{NoteSection, ResearchNote};
pub use timeline::TimelineEntry;
