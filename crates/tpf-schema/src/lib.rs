//! # tpf-schema
//!
//! JSON Schemas for every value the pipeline writes.
//!
//! Record types derive `JsonSchema` in `tpf-core`; this crate collects them in
//! a [`SchemaRegistry`] keyed by name, validates JSON values against them, and
//! backs the `tpf schema` command.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
