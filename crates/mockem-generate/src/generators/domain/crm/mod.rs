use mockem_core::SchemaKind;

use crate::foreign::ForeignContext;
use crate::generators::domain::{company_name, row_id};
use crate::generators::primitives::{
    email, future_within, int_in, money, past_within, person_name, phone, pick,
};
use crate::generators::{GeneratedValue, GeneratorContext, Row};

pub fn companies(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let now = ctx.now;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let (name, base) = company_name(vocabulary, rng);
        let mut row = Row::with_id(row_id(idx));
        row.text("name", name);
        row.text("industry", pick(vocabulary.industries, rng));
        row.text("size", pick(vocabulary.company_sizes, rng));
        row.float("revenue", money(1_000_000.0, 51_000_000.0, rng));
        row.text("website", format!("www.{base}.com"));
        row.timestamp("created_date", past_within(now, 365, rng));
        out.push(row);
    }

    out
}

pub fn contacts(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let company_id = foreign.pick_fk(SchemaKind::Companies, idx);
        let domain = foreign
            .lookup_parent(SchemaKind::Companies, company_id, "website")
            .and_then(GeneratedValue::as_str)
            .map(|website| website.trim_start_matches("www.").to_string())
            .unwrap_or_else(|| format!("company{company_id}.com"));
        let (first, last) = person_name(vocabulary.first_names, vocabulary.last_names, rng);

        let mut row = Row::with_id(row_id(idx));
        row.int("company_id", company_id);
        row.text("first_name", first);
        row.text("last_name", last);
        row.text("email", email(first, last, &domain));
        row.text("phone", phone(rng));
        row.text("title", pick(vocabulary.job_titles, rng));
        row.text("department", pick(vocabulary.departments, rng));
        out.push(row);
    }

    out
}

pub fn opportunities(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let now = ctx.now;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let company_id = foreign.pick_fk(SchemaKind::Companies, idx);
        let contact_id = foreign.pick_fk(SchemaKind::Contacts, idx);
        let company = foreign
            .lookup_parent(SchemaKind::Companies, company_id, "name")
            .and_then(GeneratedValue::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Company {company_id}"));

        let mut row = Row::with_id(row_id(idx));
        row.int("company_id", company_id);
        row.int("contact_id", contact_id);
        row.text(
            "name",
            format!("{company} - {}", pick(vocabulary.deal_names, rng)),
        );
        row.float("amount", money(5_000.0, 505_000.0, rng));
        row.text("stage", pick(vocabulary.opportunity_stages, rng));
        row.int("probability", int_in(0, 100, rng));
        row.timestamp("close_date", future_within(now, 180, rng));
        out.push(row);
    }

    out
}
