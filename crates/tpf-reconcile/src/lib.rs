//! # tpf-reconcile
//!
//! The build stage. Joins the two CSV score caches with the bibliography and
//! the parsed research notes, resolves one stream and paradigm per document,
//! and assembles the library listing and the sorted timeline.
//!
//! Nothing here extracts text: the scoring passes in `tpf-scan` run offline
//! and this crate only reads what they cached.

pub mod bibliography;
pub mod error;
pub mod library;
pub mod output;
pub mod pipeline;
pub mod scores;
pub mod stream;
pub mod surname;
pub mod timeline;

pub use error::ReconcileError;
pub use pipeline::{ReconcileInputs, ReconcileOutput, ReconcileSettings, ReconcileStats, reconcile};
