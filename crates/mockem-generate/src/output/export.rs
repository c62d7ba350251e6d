use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use mockem_core::{Catalog, SchemaKind};

use crate::engine::GenerationResult;
use crate::errors::GenerationError;
use crate::generators::format_timestamp;
use crate::output::bundle::Bundle;
use crate::output::csv::write_schema_csv;

pub const GENERATOR_NAME: &str = "MockEm";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Downloadable export of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    /// Single schema: the CSV text itself.
    Csv { csv_data: String, filename: String },
    /// Several schemas: base64 text bundle with one CSV per schema and a manifest.
    Bundle { zip_data: String, filename: String },
}

impl ExportPayload {
    pub fn filename(&self) -> &str {
        match self {
            ExportPayload::Csv { filename, .. } | ExportPayload::Bundle { filename, .. } => filename,
        }
    }

    pub fn is_bundle(&self) -> bool {
        matches!(self, ExportPayload::Bundle { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRelationship {
    pub field: String,
    pub references: String,
}

/// `manifest.json` stored next to the CSV files of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generator: String,
    pub category: String,
    pub platform: String,
    pub generated_at: String,
    pub row_count: usize,
    pub seed: u64,
    pub schemas: Vec<String>,
    pub files: Vec<String>,
    pub relationships: BTreeMap<String, Vec<ManifestRelationship>>,
}

/// Build the export for a finished run: a CSV for one schema, a bundle otherwise.
pub fn build_export(
    result: &GenerationResult,
    catalog: &Catalog,
) -> Result<ExportPayload, GenerationError> {
    let schemas: Vec<SchemaKind> = result.tables.iter().map(|table| table.schema).collect();

    let payload = if let [table] = result.tables.as_slice() {
        ExportPayload::Csv {
            csv_data: write_schema_csv(&table.rows, result.generated_at)?,
            filename: export_filename(result, &schemas, "csv"),
        }
    } else {
        let mut bundle = Bundle::new();
        for table in &result.tables {
            bundle.push(
                format!("{}.csv", table.schema),
                write_schema_csv(&table.rows, result.generated_at)?,
            );
        }

        let manifest = build_manifest(result, catalog, &bundle);
        bundle.push(MANIFEST_FILE, serde_json::to_string_pretty(&manifest)?);

        ExportPayload::Bundle {
            zip_data: bundle.encode(),
            filename: export_filename(result, &schemas, "zip"),
        }
    };

    info!(
        run_id = %result.run_id,
        filename = payload.filename(),
        bundle = payload.is_bundle(),
        "export built"
    );

    Ok(payload)
}

fn build_manifest(result: &GenerationResult, catalog: &Catalog, bundle: &Bundle) -> Manifest {
    let category = result.request.category;
    let mut relationships = BTreeMap::new();
    for table in &result.tables {
        let deps = catalog.dependencies(category, table.schema);
        if deps.is_empty() {
            continue;
        }
        relationships.insert(
            table.schema.to_string(),
            deps.iter()
                .map(|dep| ManifestRelationship {
                    field: dep.field.to_string(),
                    references: dep.schema.to_string(),
                })
                .collect(),
        );
    }

    let mut files: Vec<String> = bundle.names().map(str::to_string).collect();
    files.push(MANIFEST_FILE.to_string());

    Manifest {
        generator: GENERATOR_NAME.to_string(),
        category: category.to_string(),
        platform: result.request.platform.to_string(),
        generated_at: format_timestamp(&result.generated_at),
        row_count: result.request.row_count,
        seed: result.seed,
        schemas: result.tables.iter().map(|t| t.schema.to_string()).collect(),
        files,
        relationships,
    }
}

/// `mockem_<category>_<platform>_<schemas joined by '-'>_<YYYY-MM-DD>.<extension>`
pub fn export_filename(result: &GenerationResult, schemas: &[SchemaKind], extension: &str) -> String {
    let joined: Vec<&str> = schemas.iter().map(SchemaKind::as_str).collect();
    format!(
        "mockem_{}_{}_{}_{}.{extension}",
        result.request.category,
        result.request.platform,
        joined.join("-"),
        result.generated_at.format("%Y-%m-%d")
    )
}
