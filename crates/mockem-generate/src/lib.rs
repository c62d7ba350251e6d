//! Dependency-aware generation of related mock business tables for MockEm.
//!
//! Schemas are generated in foreign-key order so child rows reference ids
//! that exist in the parent tables of the same batch. Output is reproducible
//! from the run seed and reference time, and can be exported as CSV or as a
//! base64 text bundle.

pub mod engine;
pub mod errors;
pub mod foreign;
pub mod generators;
pub mod model;
pub mod output;
pub mod planner;
pub mod vocabulary;

pub use engine::{GeneratedTable, GenerationEngine, GenerationResult, TableView};
pub use errors::GenerationError;
pub use foreign::{ForeignContext, InMemoryForeignContext};
pub use generators::{GeneratedValue, Row};
pub use model::{GenerateOptions, GenerationIssue, GenerationReport, TableReport};
pub use output::{Bundle, ExportPayload, Manifest, build_export};
pub use vocabulary::Vocabulary;
