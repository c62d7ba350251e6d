use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{Catalog, CategoryDefinition};
use crate::types::{Category, SchemaKind};

/// Summary of a category's dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencySummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Report for dependency ordering of a whole category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReport {
    pub category: Category,
    pub summary: DependencySummary,
    pub topo_order: Option<Vec<SchemaKind>>,
    pub cycle: Option<Vec<SchemaKind>>,
}

/// Order the requested schemas so that no schema precedes a requested schema
/// it depends on.
///
/// Each pass collects every remaining schema whose dependencies are either not
/// requested or already placed, keeping the caller's relative order. A pass
/// that places nothing means the remaining schemas depend on each other, which
/// is reported as [`Error::DependencyCycle`].
pub fn resolve_generation_order(
    catalog: &Catalog,
    category: Category,
    schemas: &[SchemaKind],
) -> Result<Vec<SchemaKind>> {
    let definition = catalog
        .definition(category)
        .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;

    for schema in schemas {
        if !definition.schemas.contains(schema) {
            return Err(Error::SchemaNotInCategory {
                schema: schema.to_string(),
                category: category.to_string(),
            });
        }
    }

    let requested: HashSet<SchemaKind> = schemas.iter().copied().collect();
    let mut placed: HashSet<SchemaKind> = HashSet::with_capacity(schemas.len());
    let mut order = Vec::with_capacity(schemas.len());
    let mut remaining: Vec<SchemaKind> = schemas.to_vec();

    while !remaining.is_empty() {
        let (ready, blocked): (Vec<SchemaKind>, Vec<SchemaKind>) =
            remaining.iter().copied().partition(|schema| {
                definition
                    .dependencies(*schema)
                    .iter()
                    .all(|dep| !requested.contains(&dep.schema) || placed.contains(&dep.schema))
            });

        if ready.is_empty() {
            return Err(Error::DependencyCycle(
                blocked.iter().map(ToString::to_string).collect(),
            ));
        }

        placed.extend(ready.iter().copied());
        order.extend(ready);
        remaining = blocked;
    }

    Ok(order)
}

/// Build a deterministic dependency report for every schema of a category.
pub fn build_dependency_report(catalog: &Catalog, category: Category) -> Result<DependencyReport> {
    let definition = catalog
        .definition(category)
        .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;

    let graph = build_adjacency(definition);
    let nodes = graph.len();
    let edges = graph.values().map(|targets| targets.len()).sum();
    let summary = DependencySummary { nodes, edges };

    Ok(match toposort(&graph) {
        Ok(order) => DependencyReport {
            category,
            summary,
            topo_order: Some(order),
            cycle: None,
        },
        Err(cycle) => DependencyReport {
            category,
            summary,
            topo_order: None,
            cycle: Some(cycle),
        },
    })
}

/// Edges point from parent to child.
fn build_adjacency(definition: &CategoryDefinition) -> BTreeMap<SchemaKind, BTreeSet<SchemaKind>> {
    let mut graph: BTreeMap<SchemaKind, BTreeSet<SchemaKind>> = BTreeMap::new();

    for schema in &definition.schemas {
        graph.entry(*schema).or_default();
        for dep in definition.dependencies(*schema) {
            graph.entry(dep.schema).or_default().insert(*schema);
        }
    }

    graph
}

fn toposort(
    graph: &BTreeMap<SchemaKind, BTreeSet<SchemaKind>>,
) -> std::result::Result<Vec<SchemaKind>, Vec<SchemaKind>> {
    let mut indegree: BTreeMap<SchemaKind, usize> =
        graph.keys().map(|node| (*node, 0)).collect();

    for targets in graph.values() {
        for target in targets {
            *indegree.entry(*target).or_insert(0) += 1;
        }
    }

    let mut ready: BTreeSet<SchemaKind> = indegree
        .iter()
        .filter_map(|(node, count)| if *count == 0 { Some(*node) } else { None })
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(node) = ready.pop_first() {
        order.push(node);

        if let Some(targets) = graph.get(&node) {
            for target in targets {
                if let Some(count) = indegree.get_mut(target) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(*target);
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        Err(indegree
            .into_iter()
            .filter_map(|(node, count)| if count > 0 { Some(node) } else { None })
            .collect())
    }
}
