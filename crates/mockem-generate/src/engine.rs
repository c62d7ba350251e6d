use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, SubsecRound, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info, warn};

use mockem_core::{Catalog, GenerationRequest, SchemaKind};

use crate::errors::GenerationError;
use crate::foreign::InMemoryForeignContext;
use crate::generators::{GeneratorContext, Row, generate_schema};
use crate::model::{GenerateOptions, GenerationIssue, GenerationReport, TableReport};
use crate::planner::plan_tables;
use crate::vocabulary::Vocabulary;

/// Largest seed handed out; keeps seeds exact in JavaScript numbers.
const MAX_SEED: u64 = (1 << 53) - 1;

/// Rows generated for one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTable {
    pub schema: SchemaKind,
    pub rows: Vec<Row>,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_id: String,
    pub request: GenerationRequest,
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    /// Order in which schemas were generated.
    pub order: Vec<SchemaKind>,
    /// Generated tables in request order.
    pub tables: Vec<GeneratedTable>,
    pub report: GenerationReport,
    preview_rows: usize,
}

impl GenerationResult {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows.len()).sum()
    }

    pub fn table(&self, schema: SchemaKind) -> Option<&[Row]> {
        self.tables
            .iter()
            .find(|table| table.schema == schema)
            .map(|table| table.rows.as_slice())
    }

    /// Every generated row, keyed by schema name.
    pub fn data(&self) -> TableView<'_> {
        TableView(
            self.tables
                .iter()
                .map(|table| (table.schema, table.rows.as_slice()))
                .collect(),
        )
    }

    /// The leading rows of each schema; the full tables are left untouched.
    pub fn preview(&self) -> TableView<'_> {
        TableView(
            self.tables
                .iter()
                .map(|table| {
                    let end = table.rows.len().min(self.preview_rows);
                    (table.schema, &table.rows[..end])
                })
                .collect(),
        )
    }
}

/// Borrowed schema -> rows mapping that serializes as a JSON object in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a>(pub Vec<(SchemaKind, &'a [Row])>);

impl TableView<'_> {
    pub fn get(&self, schema: SchemaKind) -> Option<&[Row]> {
        self.0
            .iter()
            .find(|(kind, _)| *kind == schema)
            .map(|(_, rows)| *rows)
    }
}

impl Serialize for TableView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (schema, rows) in &self.0 {
            map.serialize_entry(schema.as_str(), rows)?;
        }
        map.end()
    }
}

/// Entry point for generating related schemas of one category.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    catalog: Arc<Catalog>,
    vocabulary: Vocabulary,
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(catalog: Arc<Catalog>, options: GenerateOptions) -> Self {
        Self {
            catalog,
            vocabulary: Vocabulary::builtin(),
            options,
        }
    }

    pub fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self
            .options
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..=MAX_SEED));
        // Millisecond precision so the timestamp survives an ISO-8601 round trip.
        let generated_at = self
            .options
            .reference_time
            .unwrap_or_else(Utc::now)
            .trunc_subsecs(3);

        let tasks = plan_tables(&self.catalog, request, self.options.foreign_keys)?;
        let order: Vec<SchemaKind> = tasks.iter().map(|task| task.schema).collect();
        let mut report = GenerationReport::new(run_id.clone());
        let mut foreign_context = InMemoryForeignContext::new();
        let mut generated: BTreeMap<SchemaKind, Vec<Row>> = BTreeMap::new();

        info!(
            run_id = %run_id,
            category = %request.category,
            platform = %request.platform,
            schemas = tasks.len(),
            rows = request.row_count,
            seed,
            "generation started"
        );

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            for task in &tasks {
                let table_start = Instant::now();
                let schema_name = task.schema.as_str();

                for dep in &task.resolved {
                    debug!(
                        run_id = %run_id,
                        schema = schema_name,
                        field = dep.field,
                        parent = %dep.schema,
                        "foreign key resolved against generated rows"
                    );
                }

                for dep in &task.placeholders {
                    report.record_fallback();
                    let issue = GenerationIssue::warning(
                        "placeholder_foreign_key",
                        format!(
                            "{schema_name}.{} uses placeholder ids because {} was not generated",
                            dep.field, dep.schema
                        ),
                    )
                    .with_schema(schema_name)
                    .with_field(dep.field);
                    warn!(
                        run_id = %run_id,
                        schema = schema_name,
                        field = dep.field,
                        parent = %dep.schema,
                        "foreign key filled with placeholders"
                    );
                    report.record_warning(issue);
                }

                let table_seed = hash_seed(seed, schema_name);
                let mut ctx = GeneratorContext::new(
                    &self.vocabulary,
                    generated_at,
                    ChaCha8Rng::seed_from_u64(table_seed),
                );
                let rows = generate_schema(task.schema, &mut ctx, &foreign_context, task.rows);

                report.tables.push(TableReport {
                    schema: schema_name.to_string(),
                    rows_requested: task.rows as u64,
                    rows_generated: rows.len() as u64,
                    placeholder_references: (rows.len() * task.placeholders.len()) as u64,
                });

                foreign_context.ingest_table(task.schema, &rows);
                info!(
                    run_id = %run_id,
                    schema = schema_name,
                    rows = rows.len(),
                    duration_ms = table_start.elapsed().as_millis() as u64,
                    "schema generated"
                );
                generated.insert(task.schema, rows);
            }
        }));

        if let Err(panic) = outcome {
            let message = panic_message(panic);
            warn!(run_id = %run_id, error = %message, "generation panicked");
            report.record_warning(GenerationIssue::error("generation_failed", message));
            return Err(GenerationError::Failed(Box::new(report)));
        }

        let tables: Vec<GeneratedTable> = request
            .schemas
            .iter()
            .filter_map(|schema| {
                generated.remove(schema).map(|rows| GeneratedTable {
                    schema: *schema,
                    rows,
                })
            })
            .collect();

        let result = GenerationResult {
            run_id,
            request: request.clone(),
            seed,
            generated_at,
            order,
            tables,
            report,
            preview_rows: self.options.preview_rows,
        };

        info!(
            run_id = %result.run_id,
            total_rows = result.total_rows(),
            placeholder_references = result.report.placeholder_references(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );

        Ok(result)
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during generation".to_string()
    }
}

/// FNV-1a over the schema name, keyed by the run seed.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mockem_core::{Category, Platform};

    use super::*;

    fn engine(seed: u64) -> GenerationEngine {
        GenerationEngine::new(
            Arc::new(Catalog::builtin()),
            GenerateOptions {
                seed: Some(seed),
                reference_time: Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()),
                ..GenerateOptions::default()
            },
        )
    }

    fn request(schemas: &[SchemaKind], row_count: usize) -> GenerationRequest {
        GenerationRequest {
            category: Category::SalesCrm,
            platform: Platform::Salesforce,
            schemas: schemas.to_vec(),
            row_count,
        }
    }

    #[test]
    fn seed_hash_depends_on_key() {
        assert_ne!(hash_seed(1, "companies"), hash_seed(1, "contacts"));
        assert_ne!(hash_seed(1, "companies"), hash_seed(2, "companies"));
        assert_eq!(hash_seed(9, "leads"), hash_seed(9, "leads"));
    }

    #[test]
    fn tables_follow_request_order_and_order_follows_dependencies() {
        let result = engine(1)
            .run(&request(&[SchemaKind::Contacts, SchemaKind::Companies], 5))
            .unwrap();
        assert_eq!(result.order, vec![SchemaKind::Companies, SchemaKind::Contacts]);
        let listed: Vec<SchemaKind> = result.tables.iter().map(|t| t.schema).collect();
        assert_eq!(listed, vec![SchemaKind::Contacts, SchemaKind::Companies]);
        assert_eq!(result.total_rows(), 10);
        assert_eq!(result.report.fallback_count, 0);
    }

    #[test]
    fn preview_is_bounded() {
        let result = engine(2)
            .run(&request(&[SchemaKind::Companies], 25))
            .unwrap();
        assert_eq!(result.table(SchemaKind::Companies).map(<[Row]>::len), Some(25));
        assert_eq!(
            result.preview().get(SchemaKind::Companies).map(<[Row]>::len),
            Some(10)
        );

        let small = engine(2).run(&request(&[SchemaKind::Companies], 3)).unwrap();
        assert_eq!(small.preview().get(SchemaKind::Companies).map(<[Row]>::len), Some(3));
    }

    #[test]
    fn placeholders_are_reported() {
        let result = engine(3)
            .run(&request(&[SchemaKind::Opportunities], 4))
            .unwrap();
        assert_eq!(result.report.fallback_count, 2);
        assert_eq!(result.report.placeholder_references(), 8);
        assert_eq!(result.report.warnings.len(), 2);
        assert_eq!(result.report.warnings[0].code, "placeholder_foreign_key");
    }

    #[test]
    fn reference_time_is_truncated_to_millis() {
        let options = GenerateOptions {
            seed: Some(1),
            reference_time: Some(
                Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                    + chrono::TimeDelta::nanoseconds(1_234_567),
            ),
            ..GenerateOptions::default()
        };
        let result = GenerationEngine::new(Arc::new(Catalog::builtin()), options)
            .run(&request(&[SchemaKind::Companies], 1))
            .unwrap();
        assert_eq!(result.generated_at.timestamp_subsec_nanos(), 1_000_000);
    }

    #[test]
    fn random_seed_is_json_safe() {
        let result = GenerationEngine::new(Arc::new(Catalog::builtin()), GenerateOptions::default())
            .run(&request(&[SchemaKind::Companies], 1))
            .unwrap();
        assert!(result.seed <= MAX_SEED);
    }

    #[test]
    fn data_serializes_as_object_in_request_order() {
        let result = engine(4)
            .run(&request(&[SchemaKind::Contacts, SchemaKind::Companies], 1))
            .unwrap();
        let json = serde_json::to_string(&result.data()).unwrap();
        let contacts = json.find("\"contacts\"").unwrap();
        let companies = json.find("\"companies\"").unwrap();
        assert!(contacts < companies);
    }
}
