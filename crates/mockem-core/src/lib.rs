//! Core contracts and helpers for MockEm.
//!
//! This crate defines the static catalog (categories, platforms, schema kinds
//! and their foreign-key relationship maps), request validation and the
//! dependency resolver shared by the generator and the server.

pub mod constraints;
pub mod error;
pub mod graph;
pub mod redaction;
pub mod request;
pub mod schema;
pub mod types;
pub mod validation;

pub use constraints::{Dependency, ForeignKeyPolicy};
pub use error::{Error, Result};
pub use graph::{
    DependencyReport, DependencySummary, build_dependency_report, resolve_generation_order,
};
pub use redaction::redact_token;
pub use request::{GenerationRequest, MAX_ROWS, MIN_ROWS, PREVIEW_ROWS, RawRequest};
pub use schema::{Catalog, CategoryDefinition};
pub use types::{Category, Platform, SchemaKind};
pub use validation::{validate_catalog, validate_request};
