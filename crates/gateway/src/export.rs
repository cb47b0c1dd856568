//! CSV export of gateway results: header row of field names, comma
//! delimited, UTF-8, one record per line, nothing after the last record.

use infra::models::CsvRow;
use infra::Record;
use serde::Serialize;
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

/// Export typed rows. The header row is always written, so an empty result
/// still carries its field names.
pub fn to_csv<T: Serialize + CsvRow>(rows: &[T]) -> GatewayResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    finish(writer)
}

/// Export ad-hoc records. Columns are the union of keys in first-seen order;
/// missing keys and nulls become empty cells, nested values compact JSON.
pub fn records_to_csv(records: &[Record]) -> GatewayResult<String> {
    let mut headers: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key.as_str());
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    if headers.is_empty() {
        return finish(writer);
    }

    writer.write_record(&headers)?;
    for record in records {
        writer.write_record(headers.iter().map(|h| cell(record.get(*h))))?;
    }
    finish(writer)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(nested) => nested.to_string(),
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> GatewayResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| GatewayError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GatewayError::Export(e.to_string()))
}
