use std::env;
use std::sync::Arc;

use mockem_core::{Catalog, ForeignKeyPolicy, RawRequest, validate_request};
use mockem_generate::{ExportPayload, GenerateOptions, GenerationEngine, build_export};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut category = "sales-crm".to_string();
    let mut schemas: Vec<String> = Vec::new();
    let mut rows: i64 = 10;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--category" => category = args.next().ok_or("missing --category value")?,
            "--rows" => rows = args.next().ok_or("missing --rows value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            _ => schemas.push(arg),
        }
    }
    if schemas.is_empty() {
        schemas = vec!["companies".to_string(), "contacts".to_string()];
    }

    let catalog = Arc::new(Catalog::builtin());
    let raw = RawRequest {
        category,
        platform: "general".to_string(),
        schemas,
        row_count: rows,
        seed,
        generated_at: None,
    };
    let request = validate_request(&catalog, &raw, ForeignKeyPolicy::Placeholder)?;

    let options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(Arc::clone(&catalog), options).run(&request)?;

    match build_export(&result, &catalog)? {
        ExportPayload::Csv { csv_data, filename } => {
            eprintln!("filename={filename}");
            print!("{csv_data}");
        }
        ExportPayload::Bundle { zip_data, filename } => {
            let bundle = mockem_generate::Bundle::decode(&zip_data)?;
            eprintln!("filename={filename}");
            print!("{}", bundle.to_text());
        }
    }

    Ok(())
}
