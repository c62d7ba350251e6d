use chrono::{DateTime, SecondsFormat, Utc};
use rand_chacha::ChaCha8Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};

use mockem_core::SchemaKind;

use crate::errors::GenerationError;
use crate::foreign::ForeignContext;
use crate::vocabulary::Vocabulary;

pub mod domain;
pub mod primitives;

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    /// CSV cell text; quoting is left to the CSV writer.
    pub fn to_csv(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => format!("{value:.2}"),
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Timestamp(value) => format_timestamp(value),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            GeneratedValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeneratedValue::Null => serializer.serialize_none(),
            GeneratedValue::Int(value) => serializer.serialize_i64(*value),
            GeneratedValue::Float(value) => serializer.serialize_f64(round_cents(*value)),
            GeneratedValue::Text(value) => serializer.serialize_str(value),
            GeneratedValue::Timestamp(value) => serializer.serialize_str(&format_timestamp(value)),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-31T12:00:00.000Z`.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One generated record: field names with values, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(&'static str, GeneratedValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: i64) -> Self {
        let mut row = Self::new();
        row.push("id", GeneratedValue::Int(id));
        row
    }

    pub fn push(&mut self, field: &'static str, value: GeneratedValue) {
        self.fields.push((field, value));
    }

    pub fn text(&mut self, field: &'static str, value: impl Into<String>) {
        self.push(field, GeneratedValue::Text(value.into()));
    }

    pub fn int(&mut self, field: &'static str, value: i64) {
        self.push(field, GeneratedValue::Int(value));
    }

    pub fn float(&mut self, field: &'static str, value: f64) {
        self.push(field, GeneratedValue::Float(value));
    }

    pub fn timestamp(&mut self, field: &'static str, value: DateTime<Utc>) {
        self.push(field, GeneratedValue::Timestamp(value));
    }

    pub fn get(&self, field: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(GeneratedValue::as_i64)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &GeneratedValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Per-schema generation inputs: vocabulary, clock and random source.
pub struct GeneratorContext<'a> {
    pub vocabulary: &'a Vocabulary,
    pub now: DateTime<Utc>,
    pub rng: ChaCha8Rng,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(vocabulary: &'a Vocabulary, now: DateTime<Utc>, rng: ChaCha8Rng) -> Self {
        Self {
            vocabulary,
            now,
            rng,
        }
    }
}

/// Signature shared by every schema generator.
pub type SchemaGenerator =
    fn(&mut GeneratorContext<'_>, &dyn ForeignContext, usize) -> Vec<Row>;

/// Generator for a schema kind.
pub fn generator_for(kind: SchemaKind) -> SchemaGenerator {
    use domain::{crm, finance, hr, marketing, supply_chain};

    match kind {
        SchemaKind::Companies => crm::companies,
        SchemaKind::Contacts => crm::contacts,
        SchemaKind::Opportunities => crm::opportunities,
        SchemaKind::Accounts => finance::accounts,
        SchemaKind::Transactions => finance::transactions,
        SchemaKind::Vendors => finance::vendors,
        SchemaKind::Employees => hr::employees,
        SchemaKind::Departments => hr::departments,
        SchemaKind::Campaigns => marketing::campaigns,
        SchemaKind::Leads => marketing::leads,
        SchemaKind::Products => supply_chain::products,
        SchemaKind::Orders => supply_chain::orders,
        SchemaKind::Suppliers => supply_chain::suppliers,
    }
}

/// Generate `rows` rows for `kind`, resolving foreign keys against `foreign`.
pub fn generate_schema(
    kind: SchemaKind,
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    generator_for(kind)(ctx, foreign, rows)
}

/// String entry point for callers that have not parsed the schema name yet.
pub fn generate_schema_by_name(
    name: &str,
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Result<Vec<Row>, GenerationError> {
    let kind: SchemaKind = name.parse()?;
    Ok(generate_schema(kind, ctx, foreign, rows))
}
