use mockem_core::SchemaKind;

use crate::foreign::ForeignContext;
use crate::generators::domain::{company_name, digits, row_id};
use crate::generators::primitives::{float_in, int_in, money, past_within, person_name, pick};
use crate::generators::{GeneratedValue, GeneratorContext, Row, round_cents};

pub fn products(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let unit_cost = money(5.0, 1_005.0, rng);
        let markup = float_in(1.2, 2.0, rng);
        let name = format!(
            "{} {}",
            pick(vocabulary.product_adjectives, rng),
            pick(vocabulary.product_items, rng)
        );

        let mut row = Row::with_id(row_id(idx));
        row.int("supplier_id", foreign.pick_fk(SchemaKind::Suppliers, idx));
        row.text("sku", format!("SKU-{}", digits(5, rng)));
        row.text("name", name);
        row.text("category", pick(vocabulary.product_categories, rng));
        row.float("unit_cost", unit_cost);
        row.float("unit_price", round_cents(unit_cost * markup));
        row.int("stock_level", int_in(0, 500, rng));
        out.push(row);
    }

    out
}

/// Orders reuse the referenced product's price when that product was generated.
pub fn orders(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let now = ctx.now;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let product_id = foreign.pick_fk(SchemaKind::Products, idx);
        let unit_price = match foreign
            .lookup_parent(SchemaKind::Products, product_id, "unit_price")
            .and_then(GeneratedValue::as_f64)
        {
            Some(price) => price,
            None => money(5.0, 2_010.0, rng),
        };
        let quantity = int_in(1, 50, rng);
        let (first, last) = person_name(vocabulary.first_names, vocabulary.last_names, rng);

        let mut row = Row::with_id(row_id(idx));
        row.int("product_id", product_id);
        row.text("customer_name", format!("{first} {last}"));
        row.timestamp("order_date", past_within(now, 30, rng));
        row.int("quantity", quantity);
        row.float("unit_price", unit_price);
        row.float("total_amount", round_cents(quantity as f64 * unit_price));
        row.text("status", pick(vocabulary.order_statuses, rng));
        out.push(row);
    }

    out
}

pub fn suppliers(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let (name, _) = company_name(vocabulary, rng);
        let rating = (float_in(1.0, 5.0, rng) * 10.0).floor() / 10.0;

        let mut row = Row::with_id(row_id(idx));
        row.text("name", name);
        row.text("category", pick(vocabulary.supplier_categories, rng));
        row.text("country", pick(vocabulary.countries, rng));
        row.int("lead_time_days", int_in(3, 45, rng));
        row.float("rating", rating);
        out.push(row);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreign::InMemoryForeignContext;
    use crate::generators::domain::testing::context;
    use crate::vocabulary::Vocabulary;

    fn field_f64(row: &Row, field: &str) -> f64 {
        row.get(field).and_then(GeneratedValue::as_f64).unwrap()
    }

    #[test]
    fn product_price_carries_markup() {
        let vocabulary = Vocabulary::builtin();
        let rows = products(
            &mut context(&vocabulary, 8),
            &InMemoryForeignContext::new(),
            100,
        );
        for row in &rows {
            let cost = field_f64(row, "unit_cost");
            let price = field_f64(row, "unit_price");
            assert!((5.0..1_005.0).contains(&cost));
            assert!(price >= round_cents(cost * 1.2) - 0.01);
            assert!(price <= round_cents(cost * 2.0));
        }
    }

    #[test]
    fn orders_reuse_product_prices() {
        let vocabulary = Vocabulary::builtin();
        let mut foreign = InMemoryForeignContext::new();
        let parents = products(&mut context(&vocabulary, 1), &foreign, 3);
        foreign.ingest_table(SchemaKind::Products, &parents);

        let rows = orders(&mut context(&vocabulary, 2), &foreign, 9);
        for (idx, row) in rows.iter().enumerate() {
            let product = &parents[idx % 3];
            assert_eq!(row.get("product_id"), product.get("id"));
            assert_eq!(field_f64(row, "unit_price"), field_f64(product, "unit_price"));
            let quantity = row.get("quantity").and_then(GeneratedValue::as_i64).unwrap();
            assert!((1..50).contains(&quantity));
            let expected = round_cents(quantity as f64 * field_f64(row, "unit_price"));
            assert_eq!(field_f64(row, "total_amount"), expected);
        }
    }

    #[test]
    fn orphan_orders_price_themselves() {
        let vocabulary = Vocabulary::builtin();
        let rows = orders(
            &mut context(&vocabulary, 3),
            &InMemoryForeignContext::new(),
            100,
        );
        for row in &rows {
            assert!((5.0..2_010.0).contains(&field_f64(row, "unit_price")));
        }
    }

    #[test]
    fn supplier_ranges() {
        let vocabulary = Vocabulary::builtin();
        let rows = suppliers(
            &mut context(&vocabulary, 4),
            &InMemoryForeignContext::new(),
            100,
        );
        for row in &rows {
            let lead_time = row.get("lead_time_days").and_then(GeneratedValue::as_i64).unwrap();
            assert!((3..45).contains(&lead_time));
            assert!((1.0..5.0).contains(&field_f64(row, "rating")));
        }
    }
}
