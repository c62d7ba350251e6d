use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Platform, SchemaKind};

/// Smallest accepted row count per schema.
pub const MIN_ROWS: usize = 1;
/// Largest accepted row count per schema.
pub const MAX_ROWS: usize = 100;
/// Rows per schema returned as preview.
pub const PREVIEW_ROWS: usize = 10;

/// Request body as received from clients, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    pub category: String,
    pub platform: String,
    pub schemas: Vec<String>,
    pub row_count: i64,
    /// Seed returned by a previous generation, to reproduce its rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reference time of a previous generation, to reproduce its dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Validated generation request.
///
/// The row count applies to every schema: three schemas at 10 rows yield 30 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub category: Category,
    pub platform: Platform,
    /// Requested schemas in caller order, without duplicates.
    pub schemas: Vec<SchemaKind>,
    pub row_count: usize,
}

impl GenerationRequest {
    pub fn total_rows(&self) -> usize {
        self.row_count * self.schemas.len()
    }

    pub fn is_bundle(&self) -> bool {
        self.schemas.len() > 1
    }
}
