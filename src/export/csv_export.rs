use crate::error::{RestfulError, Result};
use serde_json::Value;
use std::io::Write;

/// Render one JSON value as a CSV cell.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => String::new(),
        // Nested arrays and objects stay as compact JSON
        other => other.to_string(),
    }
}

/// Column names come from the first record, in its key order.
pub fn column_names(records: &[Value]) -> Result<Vec<String>> {
    match records.first() {
        None => Ok(Vec::new()),
        Some(Value::Object(first)) => Ok(first.keys().cloned().collect()),
        Some(_) => Err(not_an_object(1)),
    }
}

/// Write a JSON array of flat objects as CSV: one header row, then one row
/// per element. Anything that is not an array produces no output at all.
pub fn write_csv<W: Write>(value: &Value, writer: &mut W) -> Result<()> {
    let records: &[Value] = match value {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    };
    let columns = column_names(records)?;

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    if !columns.is_empty() {
        wtr.write_record(&columns)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let fields = record.as_object().ok_or_else(|| not_an_object(row))?;

        if let Some(extra) = fields.keys().find(|key| !columns.contains(*key)) {
            return Err(RestfulError::CsvRecord {
                row,
                reason: format!("field '{}' is not in the header", extra),
            });
        }

        if columns.is_empty() {
            continue;
        }

        let cells: Vec<String> = columns
            .iter()
            .map(|column| fields.get(column).map(render_cell).unwrap_or_default())
            .collect();
        wtr.write_record(&cells)?;
    }

    wtr.flush()?;
    Ok(())
}

fn not_an_object(row: usize) -> RestfulError {
    RestfulError::CsvRecord {
        row,
        reason: "expected a JSON object".to_string(),
    }
}
