use std::io::Write;

use chrono::{DateTime, Utc};

use crate::errors::GenerationError;
use crate::generators::{Row, format_timestamp};

pub const ATTRIBUTION_LINE: &str = "# Powered by MockEm - Enterprise Mock Data Generator";
pub const DISCLAIMER_LINE: &str = "# All data is purely fictional and generated for testing purposes";
/// Comment and blank lines preceding the header row.
pub const PREAMBLE_LINES: usize = 4;

/// Render rows as CSV preceded by the attribution comment block.
///
/// Columns follow the field order of the first row. Quoting is minimal:
/// only cells containing a comma, quote or line break are wrapped.
pub fn write_schema_csv(rows: &[Row], generated_at: DateTime<Utc>) -> Result<String, GenerationError> {
    let mut buffer = Vec::new();
    writeln!(buffer, "{ATTRIBUTION_LINE}")?;
    writeln!(buffer, "{DISCLAIMER_LINE}")?;
    writeln!(buffer, "# Generated on: {}", format_timestamp(&generated_at))?;
    writeln!(buffer)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buffer);

    if let Some(first) = rows.first() {
        writer.write_record(first.field_names())?;
    }

    for row in rows {
        let record: Vec<String> = row.values().map(|value| value.to_csv()).collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let buffer = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(buffer)?)
}
