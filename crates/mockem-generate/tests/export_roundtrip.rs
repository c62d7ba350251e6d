use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockem_core::{Catalog, Category, GenerationRequest, Platform, SchemaKind};
use mockem_generate::output::csv::{PREAMBLE_LINES, write_schema_csv};
use mockem_generate::output::export::MANIFEST_FILE;
use mockem_generate::{
    Bundle, ExportPayload, GenerateOptions, GenerationEngine, GenerationResult, Manifest, Row,
    build_export,
};

fn run(category: Category, schemas: &[SchemaKind], row_count: usize) -> GenerationResult {
    GenerationEngine::new(
        Arc::new(Catalog::builtin()),
        GenerateOptions {
            seed: Some(9),
            reference_time: Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()),
            ..GenerateOptions::default()
        },
    )
    .run(&GenerationRequest {
        category,
        platform: Platform::Shopify,
        schemas: schemas.to_vec(),
        row_count,
    })
    .expect("generation")
}

fn body(csv_text: &str) -> &str {
    csv_text
        .splitn(PREAMBLE_LINES + 1, '\n')
        .last()
        .expect("csv body")
}

fn parse(csv_text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body(csv_text).as_bytes());
    let headers = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    let records = reader
        .records()
        .map(|record| record.expect("record").iter().map(str::to_string).collect())
        .collect();
    (headers, records)
}

#[test]
fn single_schema_csv_parses_back() {
    let result = run(Category::SalesCrm, &[SchemaKind::Contacts], 40);
    let payload = build_export(&result, &Catalog::builtin()).unwrap();
    let ExportPayload::Csv { csv_data, .. } = payload else {
        panic!("single schema exports csv");
    };

    assert!(csv_data.lines().take(3).all(|line| line.starts_with('#')));
    let (headers, records) = parse(&csv_data);
    let rows = result.table(SchemaKind::Contacts).unwrap();
    assert_eq!(records.len(), rows.len());
    assert_eq!(headers, rows[0].field_names().collect::<Vec<_>>());
    for (record, row) in records.iter().zip(rows) {
        let expected: Vec<String> = row.values().map(|value| value.to_csv()).collect();
        assert_eq!(record, &expected);
    }
}

#[test]
fn awkward_text_survives_quoting() {
    let tricky = [
        "plain",
        "comma, inside",
        "quote \" inside",
        "\"leading quote",
        "line\nbreak",
        "all, of \"them\"\r\nat once",
    ];
    let rows: Vec<Row> = tricky
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let mut row = Row::with_id(idx as i64 + 1);
            row.text("note", *text);
            row
        })
        .collect();

    let csv_text = write_schema_csv(&rows, Utc::now()).unwrap();
    let (_, records) = parse(&csv_text);
    let notes: Vec<&str> = records.iter().map(|record| record[1].as_str()).collect();
    assert_eq!(notes, tricky);
}

#[test]
fn three_schema_export_is_a_four_file_bundle() {
    let schemas = [SchemaKind::Products, SchemaKind::Orders, SchemaKind::Suppliers];
    let result = run(Category::SupplyChain, &schemas, 6);
    let payload = build_export(&result, &Catalog::builtin()).unwrap();
    assert!(payload.is_bundle());
    assert!(payload.filename().ends_with(".zip"));

    let ExportPayload::Bundle { zip_data, .. } = payload else {
        panic!("multi-schema exports bundle");
    };
    let bundle = Bundle::decode(&zip_data).unwrap();
    assert_eq!(bundle.len(), 4);
    assert_eq!(
        bundle.names().collect::<Vec<_>>(),
        vec!["products.csv", "orders.csv", "suppliers.csv", MANIFEST_FILE]
    );

    let manifest: Manifest = serde_json::from_str(bundle.get(MANIFEST_FILE).unwrap()).unwrap();
    assert_eq!(manifest.schemas, vec!["products", "orders", "suppliers"]);
    assert_eq!(manifest.platform, "shopify");
    assert_eq!(manifest.category, "supply-chain");

    for schema in schemas {
        let (_, records) = parse(bundle.get(&format!("{schema}.csv")).unwrap());
        assert_eq!(records.len(), 6);
    }
}
