use std::collections::BTreeSet;

use crate::constraints::ForeignKeyPolicy;
use crate::error::{Error, Result};
use crate::graph::build_dependency_report;
use crate::request::{GenerationRequest, MAX_ROWS, MIN_ROWS, RawRequest};
use crate::schema::Catalog;
use crate::types::{Category, Platform, SchemaKind};

/// Validate internal consistency of the catalog.
///
/// This checks:
/// - every category is defined once and lists at least one schema
/// - schemas belong to the category listing them and are listed once
/// - dependencies stay inside the category and form an acyclic graph
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut seen_categories = BTreeSet::new();
    let mut seen_schemas = BTreeSet::new();

    for definition in &catalog.categories {
        let category = definition.category;
        if !seen_categories.insert(category) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate category: {category}"
            )));
        }

        if definition.schemas.is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "category {category} lists no schemas"
            )));
        }

        for schema in &definition.schemas {
            if schema.category() != category {
                return Err(Error::InvalidCatalog(format!(
                    "schema {schema} belongs to {}, not {category}",
                    schema.category()
                )));
            }
            if !seen_schemas.insert(*schema) {
                return Err(Error::InvalidCatalog(format!(
                    "schema {schema} is listed more than once"
                )));
            }
        }

        for (schema, dependencies) in &definition.relationships {
            if !definition.schemas.contains(schema) {
                return Err(Error::InvalidCatalog(format!(
                    "relationship declared for {schema}, which is not part of {category}"
                )));
            }
            for dep in dependencies {
                if !definition.schemas.contains(&dep.schema) {
                    return Err(Error::InvalidCatalog(format!(
                        "{schema}.{} references {}, which is not part of {category}",
                        dep.field, dep.schema
                    )));
                }
            }
        }

        let report = build_dependency_report(catalog, category)?;
        if let Some(cycle) = report.cycle {
            return Err(Error::DependencyCycle(
                cycle.iter().map(ToString::to_string).collect(),
            ));
        }
    }

    Ok(())
}

/// Validate a raw request against the catalog.
///
/// Checks run in a fixed order so the first problem reported is stable:
/// category, platform, schema list, schema membership, duplicates, row count
/// and finally parent coverage when `policy` requires it.
pub fn validate_request(
    catalog: &Catalog,
    raw: &RawRequest,
    policy: ForeignKeyPolicy,
) -> Result<GenerationRequest> {
    let category: Category = raw.category.parse()?;
    if catalog.definition(category).is_none() {
        return Err(Error::UnknownCategory(raw.category.clone()));
    }

    let platform: Platform = raw.platform.parse()?;

    if raw.schemas.is_empty() {
        return Err(Error::EmptySchemaList);
    }

    let mut schemas: Vec<SchemaKind> = Vec::with_capacity(raw.schemas.len());
    for name in &raw.schemas {
        let schema = name
            .parse::<SchemaKind>()
            .ok()
            .filter(|schema| catalog.contains(category, *schema))
            .ok_or_else(|| Error::SchemaNotInCategory {
                schema: name.clone(),
                category: category.to_string(),
            })?;
        if schemas.contains(&schema) {
            return Err(Error::DuplicateSchema(name.clone()));
        }
        schemas.push(schema);
    }

    let row_count = usize::try_from(raw.row_count)
        .ok()
        .filter(|count| (MIN_ROWS..=MAX_ROWS).contains(count))
        .ok_or(Error::InvalidRowCount {
            value: raw.row_count,
            min: MIN_ROWS,
            max: MAX_ROWS,
        })?;

    if policy == ForeignKeyPolicy::RequireParents {
        for schema in &schemas {
            for dep in catalog.dependencies(category, *schema) {
                if !schemas.contains(&dep.schema) {
                    return Err(Error::MissingParent {
                        schema: schema.to_string(),
                        parent: dep.schema.to_string(),
                    });
                }
            }
        }
    }

    Ok(GenerationRequest {
        category,
        platform,
        schemas,
        row_count,
    })
}
