use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use super::model::{Row, Table, Value};
use crate::error::Result;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a delimited table from a UTF-8 CSV file with a header row.
///
/// Column names come from the header; cell types are inferred per cell
/// (integer, float, bool, empty → null, otherwise string). No schema
/// validation happens here — required-column checks are the caller's job.
///
/// Errors are [`Error::Io`] when the file cannot be opened and
/// [`Error::Csv`] when its content is not parseable as CSV.
///
/// [`Error::Io`]: crate::error::Error::Io
/// [`Error::Csv`]: crate::error::Error::Csv
pub fn load(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        let mut cells = BTreeMap::new();
        for (col_idx, raw) in record.iter().enumerate() {
            // Ragged rows are rejected by the csv reader before we get here,
            // so every cell index has a header.
            let name = &columns[col_idx];
            cells.insert(name.clone(), guess_cell_type(raw));
        }
        rows.push(Row::new(cells));
    }

    log::debug!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        columns.len(),
        path.display()
    );

    Ok(Table::new(columns, rows))
}

fn guess_cell_type(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}
