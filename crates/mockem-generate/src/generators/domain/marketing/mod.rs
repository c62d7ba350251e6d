use chrono::{Datelike, TimeDelta};
use mockem_core::SchemaKind;

use crate::foreign::ForeignContext;
use crate::generators::domain::{company_name, row_id};
use crate::generators::primitives::{future_within, int_in, money, person_name, pick};
use crate::generators::{GeneratorContext, Row};

pub fn campaigns(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let now = ctx.now;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let start = future_within(now, 90, rng);
        let end = start + TimeDelta::days(int_in(0, 180, rng));
        let name = format!(
            "{} {} {}",
            pick(vocabulary.seasons, rng),
            start.year(),
            pick(vocabulary.campaign_themes, rng)
        );

        let mut row = Row::with_id(row_id(idx));
        row.text("name", name);
        row.text("type", pick(vocabulary.campaign_types, rng));
        row.float("budget", money(5_000.0, 105_000.0, rng));
        row.timestamp("start_date", start);
        row.timestamp("end_date", end);
        row.text("target_audience", pick(vocabulary.audiences, rng));
        row.text("status", pick(vocabulary.campaign_statuses, rng));
        out.push(row);
    }

    out
}

pub fn leads(
    ctx: &mut GeneratorContext<'_>,
    foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let id = row_id(idx);
        let (first, last) = person_name(vocabulary.first_names, vocabulary.last_names, rng);
        let (company, _) = company_name(vocabulary, rng);

        let mut row = Row::with_id(id);
        row.int("campaign_id", foreign.pick_fk(SchemaKind::Campaigns, idx));
        row.text("first_name", first);
        row.text("last_name", last);
        row.text(
            "email",
            format!("lead{id}@prospect{}.com", int_in(1, 100, rng)),
        );
        row.text("company", company);
        row.text("source", pick(vocabulary.lead_sources, rng));
        row.int("score", int_in(0, 100, rng));
        row.text("status", pick(vocabulary.lead_statuses, rng));
        out.push(row);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreign::InMemoryForeignContext;
    use crate::generators::GeneratedValue;
    use crate::generators::domain::testing::{context, now};
    use crate::vocabulary::Vocabulary;

    #[test]
    fn campaign_windows() {
        let vocabulary = Vocabulary::builtin();
        let rows = campaigns(
            &mut context(&vocabulary, 5),
            &InMemoryForeignContext::new(),
            100,
        );
        let reference = now();
        for row in &rows {
            let start = row.get("start_date").and_then(GeneratedValue::as_timestamp).unwrap();
            let end = row.get("end_date").and_then(GeneratedValue::as_timestamp).unwrap();
            assert!(start >= reference && start < reference + TimeDelta::days(90));
            assert!(end >= start && end < start + TimeDelta::days(180));
            let budget = row.get("budget").and_then(GeneratedValue::as_f64).unwrap();
            assert!((5_000.0..105_000.0).contains(&budget));
        }
    }

    #[test]
    fn leads_follow_campaigns() {
        let vocabulary = Vocabulary::builtin();
        let mut foreign = InMemoryForeignContext::new();
        let parents = campaigns(&mut context(&vocabulary, 1), &foreign, 2);
        foreign.ingest_table(SchemaKind::Campaigns, &parents);

        let rows = leads(&mut context(&vocabulary, 2), &foreign, 5);
        let campaign_ids: Vec<i64> = rows
            .iter()
            .filter_map(|row| row.get("campaign_id").and_then(GeneratedValue::as_i64))
            .collect();
        assert_eq!(campaign_ids, vec![1, 2, 1, 2, 1]);

        let email = rows[2].get("email").and_then(GeneratedValue::as_str).unwrap();
        assert!(email.starts_with("lead3@prospect"));
        for row in &rows {
            let score = row.get("score").and_then(GeneratedValue::as_i64).unwrap();
            assert!((0..100).contains(&score));
        }
    }
}
