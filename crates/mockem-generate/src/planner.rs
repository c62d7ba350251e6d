use mockem_core::{
    Catalog, Dependency, Error as CoreError, ForeignKeyPolicy, GenerationRequest, SchemaKind,
    resolve_generation_order,
};

use crate::errors::GenerationError;

/// Planned generation task for a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub schema: SchemaKind,
    pub rows: usize,
    /// Dependencies whose parent schema is generated earlier in the batch.
    pub resolved: Vec<Dependency>,
    /// Dependencies filled with placeholder ids.
    pub placeholders: Vec<Dependency>,
}

/// Build a deterministic generation plan for the requested schemas.
pub fn plan_tables(
    catalog: &Catalog,
    request: &GenerationRequest,
    policy: ForeignKeyPolicy,
) -> Result<Vec<GenerationTask>, GenerationError> {
    if request.schemas.is_empty() {
        return Err(CoreError::EmptySchemaList.into());
    }

    let order = resolve_generation_order(catalog, request.category, &request.schemas)?;

    let mut tasks = Vec::with_capacity(order.len());
    for schema in order {
        let (resolved, placeholders): (Vec<Dependency>, Vec<Dependency>) = catalog
            .dependencies(request.category, schema)
            .iter()
            .copied()
            .partition(|dep| request.schemas.contains(&dep.schema));

        if policy == ForeignKeyPolicy::RequireParents {
            if let Some(dep) = placeholders.first() {
                return Err(CoreError::MissingParent {
                    schema: schema.to_string(),
                    parent: dep.schema.to_string(),
                }
                .into());
            }
        }

        tasks.push(GenerationTask {
            schema,
            rows: request.row_count,
            resolved,
            placeholders,
        });
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use mockem_core::{Category, Platform};

    use super::*;

    fn request(category: Category, schemas: &[SchemaKind]) -> GenerationRequest {
        GenerationRequest {
            category,
            platform: Platform::General,
            schemas: schemas.to_vec(),
            row_count: 5,
        }
    }

    #[test]
    fn parents_come_first_with_resolved_dependencies() {
        let catalog = Catalog::builtin();
        let tasks = plan_tables(
            &catalog,
            &request(
                Category::SalesCrm,
                &[SchemaKind::Opportunities, SchemaKind::Contacts, SchemaKind::Companies],
            ),
            ForeignKeyPolicy::Placeholder,
        )
        .unwrap();

        let order: Vec<SchemaKind> = tasks.iter().map(|task| task.schema).collect();
        assert_eq!(
            order,
            vec![SchemaKind::Companies, SchemaKind::Contacts, SchemaKind::Opportunities]
        );
        assert!(tasks.iter().all(|task| task.placeholders.is_empty()));
        assert_eq!(tasks[2].resolved.len(), 2);
    }

    #[test]
    fn missing_parents_become_placeholders() {
        let catalog = Catalog::builtin();
        let tasks = plan_tables(
            &catalog,
            &request(Category::SalesCrm, &[SchemaKind::Opportunities, SchemaKind::Companies]),
            ForeignKeyPolicy::Placeholder,
        )
        .unwrap();
        let opportunities = &tasks[1];
        assert_eq!(opportunities.schema, SchemaKind::Opportunities);
        assert_eq!(
            opportunities.placeholders,
            vec![Dependency::new(SchemaKind::Contacts, "contact_id")]
        );
    }

    #[test]
    fn require_parents_rejects_placeholders() {
        let catalog = Catalog::builtin();
        let err = plan_tables(
            &catalog,
            &request(Category::SupplyChain, &[SchemaKind::Orders]),
            ForeignKeyPolicy::RequireParents,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Core(CoreError::MissingParent { .. })
        ));
    }
}
