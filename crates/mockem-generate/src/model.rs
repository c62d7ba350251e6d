use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mockem_core::{ForeignKeyPolicy, PREVIEW_ROWS};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Run seed; a fresh random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Reference instant for relative dates; the current time when absent.
    pub reference_time: Option<DateTime<Utc>>,
    /// Rows per schema included in the preview.
    pub preview_rows: usize,
    /// Treatment of foreign keys whose parent schema is not in the batch.
    pub foreign_keys: ForeignKeyPolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            reference_time: None,
            preview_rows: PREVIEW_ROWS,
            foreign_keys: ForeignKeyPolicy::Placeholder,
        }
    }
}

/// Summary of a generated schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReport {
    pub schema: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
    /// Foreign-key values filled with placeholders instead of generated parents.
    pub placeholder_references: u64,
}

/// Structured generation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl GenerationIssue {
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            level: "warning".to_string(),
            code: code.to_string(),
            message: message.into(),
            schema: None,
            field: None,
        }
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            level: "error".to_string(),
            ..Self::warning(code, message)
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub run_id: String,
    pub tables: Vec<TableReport>,
    /// Number of dependencies satisfied by placeholders.
    pub fallback_count: u64,
    pub warnings: Vec<GenerationIssue>,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            tables: Vec::new(),
            fallback_count: 0,
            warnings: Vec::new(),
        }
    }

    pub fn record_fallback(&mut self) {
        self.fallback_count += 1;
    }

    pub fn record_warning(&mut self, issue: GenerationIssue) {
        self.warnings.push(issue);
    }

    pub fn placeholder_references(&self) -> u64 {
        self.tables
            .iter()
            .map(|table| table.placeholder_references)
            .sum()
    }

    pub fn table(&self, schema: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.schema == schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_builders() {
        let issue = GenerationIssue::error("generation_failed", "boom")
            .with_schema("contacts")
            .with_field("company_id");
        assert_eq!(issue.level, "error");
        assert_eq!(issue.schema.as_deref(), Some("contacts"));
        assert_eq!(issue.field.as_deref(), Some("company_id"));
    }

    #[test]
    fn report_sums_placeholders() {
        let mut report = GenerationReport::new("run".to_string());
        for (schema, placeholders) in [("contacts", 5), ("opportunities", 10)] {
            report.tables.push(TableReport {
                schema: schema.to_string(),
                rows_requested: 5,
                rows_generated: 5,
                placeholder_references: placeholders,
            });
        }
        assert_eq!(report.placeholder_references(), 15);
        assert_eq!(report.table("contacts").map(|t| t.rows_generated), Some(5));
        assert!(report.table("orders").is_none());
    }
}
