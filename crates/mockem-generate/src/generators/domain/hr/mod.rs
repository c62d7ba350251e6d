use mockem_core::SchemaKind;

use crate::foreign::ForeignContext;
use crate::generators::domain::{digits, row_id};
use crate::generators::primitives::{email, int_in, money, past_within, person_name, pick};
use crate::generators::{GeneratedValue, GeneratorContext, Row};

const EMPLOYEE_EMAIL_DOMAIN: &str = "example.com";

/// Employees; `manager_id` points at an earlier employee of the same batch.
pub fn employees(
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
        let (first, last) = person_name(vocabulary.first_names, vocabulary.last_names, rng);
        let manager_id = if idx == 0 {
            GeneratedValue::Null
        } else {
            GeneratedValue::Int(int_in(1, id, rng))
        };

        let mut row = Row::with_id(id);
        row.text("employee_number", format!("EMP{id:04}"));
        row.text("first_name", first);
        row.text("last_name", last);
        row.text("email", email(first, last, EMPLOYEE_EMAIL_DOMAIN));
        row.int("department_id", foreign.pick_fk(SchemaKind::Departments, idx));
        row.text("position", pick(vocabulary.positions, rng));
        row.push("manager_id", manager_id);
        row.timestamp("hire_date", past_within(now, 1_095, rng));
        row.float("salary", money(40_000.0, 160_000.0, rng));
        out.push(row);
    }

    out
}

pub fn departments(
    ctx: &mut GeneratorContext<'_>,
    _foreign: &dyn ForeignContext,
    rows: usize,
) -> Vec<Row> {
    let vocabulary = ctx.vocabulary;
    let rng = &mut ctx.rng;
    let names = vocabulary.department_names;
    let mut out = Vec::with_capacity(rows);

    for idx in 0..rows {
        let name = match names.len() {
            0 => format!("Department {}", row_id(idx)),
            len if idx < len => names[idx].to_string(),
            len => format!("{} {}", names[idx % len], idx / len + 1),
        };

        let mut row = Row::with_id(row_id(idx));
        row.text("name", name);
        row.float("budget", money(100_000.0, 5_100_000.0, rng));
        row.text("location", pick(vocabulary.office_locations, rng));
        row.int("head_count", int_in(5, 250, rng));
        row.text("cost_center", format!("CC-{}", digits(4, rng)));
        out.push(row);
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::foreign::InMemoryForeignContext;
    use crate::generators::domain::testing::context;
    use crate::vocabulary::Vocabulary;

    #[test]
    fn managers_precede_their_reports() {
        let vocabulary = Vocabulary::builtin();
        for seed in 0..20 {
            let rows = employees(
                &mut context(&vocabulary, seed),
                &InMemoryForeignContext::new(),
                50,
            );
            assert!(rows[0].get("manager_id").unwrap().is_null());
            for (idx, row) in rows.iter().enumerate().skip(1) {
                let manager = row.get("manager_id").and_then(GeneratedValue::as_i64).unwrap();
                assert!((1..=idx as i64).contains(&manager));
            }
        }
    }

    #[test]
    fn employee_numbers_are_unique() {
        let vocabulary = Vocabulary::builtin();
        let rows = employees(
            &mut context(&vocabulary, 1),
            &InMemoryForeignContext::new(),
            100,
        );
        let numbers: BTreeSet<&str> = rows
            .iter()
            .filter_map(|row| row.get("employee_number").and_then(GeneratedValue::as_str))
            .collect();
        assert_eq!(numbers.len(), 100);
        assert!(numbers.contains("EMP0001"));
    }

    #[test]
    fn department_names_are_suffixed_after_the_list() {
        let vocabulary = Vocabulary::builtin();
        let len = vocabulary.department_names.len();
        let rows = departments(
            &mut context(&vocabulary, 2),
            &InMemoryForeignContext::new(),
            len + 1,
        );
        let names: BTreeSet<&str> = rows
            .iter()
            .filter_map(|row| row.get("name").and_then(GeneratedValue::as_str))
            .collect();
        assert_eq!(names.len(), len + 1);
        let last = rows[len].get("name").and_then(GeneratedValue::as_str).unwrap();
        assert_eq!(last, format!("{} 2", vocabulary.department_names[0]));
    }

    #[test]
    fn head_count_range() {
        let vocabulary = Vocabulary::builtin();
        let rows = departments(
            &mut context(&vocabulary, 3),
            &InMemoryForeignContext::new(),
            100,
        );
        for row in &rows {
            let head_count = row.get("head_count").and_then(GeneratedValue::as_i64).unwrap();
            assert!((5..250).contains(&head_count));
        }
    }
}
