use std::collections::{BTreeMap, HashMap};

use mockem_core::SchemaKind;

use crate::generators::{GeneratedValue, Row};

/// Number of distinct placeholder ids used when a parent schema was not generated.
pub const PLACEHOLDER_RANGE: usize = 5;

/// Read-only view of the parent rows generated earlier in the batch.
pub trait ForeignContext {
    /// Id of the parent row referenced by child row `row_index`.
    ///
    /// Parents are assigned round-robin (`parents[i mod len]`), so every id
    /// handed out exists in the parent set and fan-out stays even. Without
    /// generated parents the id is the placeholder `(i mod 5) + 1`, which is
    /// not guaranteed to match any row.
    fn pick_fk(&self, parent: SchemaKind, row_index: usize) -> i64;

    /// Field of the parent row with the given id, when that row exists.
    fn lookup_parent(&self, parent: SchemaKind, id: i64, field: &str) -> Option<&GeneratedValue>;

    /// Whether rows of `parent` are available for references.
    fn has_parent(&self, parent: SchemaKind) -> bool;
}

pub fn placeholder_id(row_index: usize) -> i64 {
    ((row_index % PLACEHOLDER_RANGE) + 1) as i64
}

#[derive(Debug, Default)]
pub struct InMemoryForeignContext {
    ids: BTreeMap<SchemaKind, Vec<i64>>,
    rows_by_id: BTreeMap<SchemaKind, HashMap<i64, Row>>,
}

impl InMemoryForeignContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `rows` available as parents for schemas generated later.
    pub fn ingest_table(&mut self, schema: SchemaKind, rows: &[Row]) {
        let mut ids = Vec::with_capacity(rows.len());
        let mut row_map = HashMap::with_capacity(rows.len());

        for row in rows {
            if let Some(id) = row.id() {
                ids.push(id);
                row_map.insert(id, row.clone());
            }
        }

        self.ids.insert(schema, ids);
        self.rows_by_id.insert(schema, row_map);
    }
}

impl ForeignContext for InMemoryForeignContext {
    fn pick_fk(&self, parent: SchemaKind, row_index: usize) -> i64 {
        match self.ids.get(&parent) {
            Some(ids) if !ids.is_empty() => ids[row_index % ids.len()],
            _ => placeholder_id(row_index),
        }
    }

    fn lookup_parent(&self, parent: SchemaKind, id: i64, field: &str) -> Option<&GeneratedValue> {
        self.rows_by_id.get(&parent)?.get(&id)?.get(field)
    }

    fn has_parent(&self, parent: SchemaKind) -> bool {
        self.ids.get(&parent).is_some_and(|ids| !ids.is_empty())
    }
}
