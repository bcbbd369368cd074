use super::model::{Table, Value};

// ---------------------------------------------------------------------------
// Target filter
// ---------------------------------------------------------------------------

/// Keep only rows whose `Target` cell equals `target` exactly
/// (case-sensitive string comparison).
///
/// Returns a fresh [`Table`] with the same columns; the input is untouched.
/// No matching row yields an empty table, which is not an error. A `Target`
/// cell that inferred to a non-string type never matches.
pub fn filter_by_target(table: &Table, target: &str) -> Table {
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            matches!(row.get("Target"), Some(Value::String(s)) if s == target)
        })
        .cloned()
        .collect();

    Table::new(table.columns.clone(), rows)
}
