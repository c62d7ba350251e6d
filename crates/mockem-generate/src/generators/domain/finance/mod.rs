use mockem_core::SchemaKind;
use rand::Rng;

use crate::foreign::ForeignContext;
use crate::generators::domain::{company_name, digits, row_id};
use crate::generators::primitives::{money, past_within, pick};
use crate::generators::{GeneratedValue, GeneratorContext, Row};

pub fn accounts(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let mut row = Row::with_id(row_id(idx));
        row.text("account_number", format!("ACC-{}", digits(6, rng)));
        row.text("name", pick(vocabulary.account_names, rng));
        row.text("type", pick(vocabulary.account_types, rng));
        row.float("balance", money(-500_000.0, 1_500_000.0, rng));
        row.text("currency", pick(vocabulary.currencies, rng));
        out.push(row);
    }

    out
}

/// Ledger entries; each row carries either a debit or a credit, never both.
pub fn transactions(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let now = ctx.now;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let id = row_id(idx);
        let amount = GeneratedValue::Float(money(10.0, 10_010.0, rng));
        let (debit, credit) = if rng.random_bool(0.5) {
            (amount, GeneratedValue::Null)
        } else {
            (GeneratedValue::Null, amount)
        };

        let mut row = Row::with_id(id);
        row.int("account_id", foreign.pick_fk(SchemaKind::Accounts, idx));
        row.int("vendor_id", foreign.pick_fk(SchemaKind::Vendors, idx));
        row.timestamp("date", past_within(now, 30, rng));
        row.text(
            "description",
            format!("{} #{id}", pick(vocabulary.transaction_descriptions, rng)),
        );
        row.push("debit", debit);
        row.push("credit", credit);
        out.push(row);
    }

    out
}

pub fn vendors(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let (name, base) = company_name(vocabulary, rng);
        let mut row = Row::with_id(row_id(idx));
        row.text("name", name);
        row.text("category", pick(vocabulary.vendor_categories, rng));
        row.text("payment_terms", pick(vocabulary.payment_terms, rng));
        row.text("contact_email", format!("billing@{base}.com"));
        out.push(row);
    }

    out
}
