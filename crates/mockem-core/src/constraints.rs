use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::SchemaKind;

/// Foreign-key dependency of a schema on another schema of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Dependency {
    /// Parent schema whose ids are referenced.
    pub schema: SchemaKind,
    /// Child field holding the parent id.
    pub field: &'static str,
}

impl Dependency {
    pub const fn new(schema: SchemaKind, field: &'static str) -> Self {
        Self { schema, field }
    }
}

/// How foreign keys are treated when the parent schema is not part of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ForeignKeyPolicy {
    /// Fill the key with a small-range placeholder id (`(i mod 5) + 1`).
    /// Such references are not guaranteed to match any row.
    #[default]
    Placeholder,
    /// Reject requests that select a child schema without its parents.
    RequireParents,
}
