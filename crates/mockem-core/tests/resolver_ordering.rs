use mockem_core::{Catalog, Category, SchemaKind, resolve_generation_order};

fn permutations(items: &[SchemaKind]) -> Vec<Vec<SchemaKind>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(idx);
        for mut tail in permutations(&rest) {
            tail.insert(0, *item);
            out.push(tail);
        }
    }
    out
}

fn subsets(items: &[SchemaKind]) -> Vec<Vec<SchemaKind>> {
    (1..(1usize << items.len()))
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .map(|(_, item)| *item)
                .collect()
        })
        .collect()
}

#[test]
fn no_schema_precedes_a_requested_dependency() {
    let catalog = Catalog::builtin();

    for category in Category::ALL {
        for subset in subsets(catalog.schemas(category)) {
            for request in permutations(&subset) {
                let order = resolve_generation_order(&catalog, category, &request)
                    .unwrap_or_else(|err| panic!("{category} {request:?}: {err}"));

                let mut sorted_order = order.clone();
                sorted_order.sort();
                let mut sorted_request = request.clone();
                sorted_request.sort();
                assert_eq!(sorted_order, sorted_request, "order must be a permutation");

                for (position, schema) in order.iter().enumerate() {
                    for dep in catalog.dependencies(category, *schema) {
                        if let Some(parent_position) =
                            order.iter().position(|item| *item == dep.schema)
                        {
                            assert!(
                                parent_position < position,
                                "{} placed before its parent {} in {order:?}",
                                schema,
                                dep.schema
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn ordering_is_deterministic() {
    let catalog = Catalog::builtin();
    let request = [SchemaKind::Orders, SchemaKind::Suppliers, SchemaKind::Products];
    let first = resolve_generation_order(&catalog, Category::SupplyChain, &request).unwrap();
    for _ in 0..10 {
        let again = resolve_generation_order(&catalog, Category::SupplyChain, &request).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(
        first,
        vec![SchemaKind::Suppliers, SchemaKind::Products, SchemaKind::Orders]
    );
}
